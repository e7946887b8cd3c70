//! Market data error types.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// Structured error handling for curve and cohort-schedule operations
/// with descriptive context for each failure mode.
///
/// # Examples
///
/// ```
/// use bond_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (negative time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value.
        t: f64,
    },

    /// Query point outside valid domain.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds.
        x: f64,
        /// Minimum valid value.
        min: f64,
        /// Maximum valid value.
        max: f64,
    },

    /// Insufficient data for construction or lookup.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points required.
        need: usize,
    },

    /// A probability outside [0, 1], or a prefix sum exceeding 1.
    #[error("Invalid probability: {value}")]
    InvalidProbability {
        /// The offending value.
        value: f64,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InsufficientData { got, need } => {
                PricingError::InsufficientCohortData { got, need }
            }
            other => PricingError::InvalidParameter {
                name: "market_data",
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_maturity_display() {
        let err = MarketDataError::InvalidMaturity { t: -1.5 };
        assert_eq!(format!("{}", err), "Invalid maturity: t = -1.5");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = MarketDataError::OutOfBounds {
            x: 5.0,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(format!("{}", err), "Out of bounds: 5 not in [0, 3]");
    }

    #[test]
    fn test_insufficient_data_maps_to_cohort_error() {
        let err = MarketDataError::InsufficientData { got: 3, need: 5 };
        let pricing: PricingError = err.into();
        assert_eq!(
            pricing,
            PricingError::InsufficientCohortData { got: 3, need: 5 }
        );
    }

    #[test]
    fn test_invalid_probability_maps_to_invalid_parameter() {
        let err = MarketDataError::InvalidProbability { value: 1.2 };
        let pricing: PricingError = err.into();
        match pricing {
            PricingError::InvalidParameter { reason, .. } => {
                assert!(reason.contains("1.2"));
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = MarketDataError::InvalidMaturity { t: -1.0 };
        let _: &dyn std::error::Error = &err;
    }
}
