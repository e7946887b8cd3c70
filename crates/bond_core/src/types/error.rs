//! Error types for structured error handling.
//!
//! This module provides `PricingError`, the caller-facing error for all
//! valuation operations. Curve-level failures are reported as
//! [`MarketDataError`](crate::market_data::MarketDataError) and bridged
//! into `PricingError` at the pricer boundary.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for valuation operations with
/// descriptive context for each failure mode. Every variant is raised
/// before any accumulation begins; the engine never substitutes defaults
/// for invalid configuration.
///
/// # Variants
///
/// - `InvalidParameter`: parameter outside its valid domain
/// - `InsufficientCohortData`: cohort default vector shorter than maturity
/// - `UnsupportedConvention`: unknown compounding convention tag
/// - `NumericDegeneracy`: a shifted or derived time grid became empty
///
/// # Examples
///
/// ```
/// use bond_core::types::PricingError;
///
/// let err = PricingError::InsufficientCohortData { got: 3, need: 5 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient cohort data: got 3 years, need 5"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Parameter outside its valid domain (non-positive face value or
    /// maturity, recovery rate outside [0, 1], non-finite input, ...).
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Cohort default vector shorter than the bond maturity in years.
    #[error("Insufficient cohort data: got {got} years, need {need}")]
    InsufficientCohortData {
        /// Number of marginal default probabilities provided.
        got: usize,
        /// Number of whole years required by the bond terms.
        need: usize,
    },

    /// Unknown compounding convention tag.
    #[error("Unsupported compounding convention: {0}")]
    UnsupportedConvention(String),

    /// A derived time grid degenerated to nothing (e.g. shifting the
    /// payment schedule by one day past the final surviving period).
    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}
