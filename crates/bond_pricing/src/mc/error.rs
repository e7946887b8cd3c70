//! Error types for the Monte Carlo kernel.

use bond_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the Monte Carlo simulation engine.
///
/// These errors occur at construction, before any simulation work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside the valid range `[1, MAX_PATHS]`.
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Total step count outside the valid range `[1, MAX_STEPS]`.
    #[error("Invalid step count {0}: must be in range [1, 100_000]")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidParameter {
            name: "simulation",
            reason: err.to_string(),
        }
    }
}
