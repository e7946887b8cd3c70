//! Rating-cohort default schedules.
//!
//! A cohort schedule holds empirical or assumed marginal default
//! probabilities by year for a rating class, as an alternative to a
//! continuous hazard-rate model. Survival at whole year `t` is
//! `1 - Σ defaults[0..t]`.

use super::error::MarketDataError;
use num_traits::Float;

/// Year-indexed marginal default probabilities for a rating cohort.
///
/// # Invariants
///
/// - every marginal probability lies in [0, 1]
/// - the cumulative sum over any prefix never exceeds 1
///
/// Both are validated at construction; lookups past the end of the
/// vector fail rather than extrapolate.
///
/// # Example
///
/// ```
/// use bond_core::market_data::CohortSchedule;
///
/// let cohort = CohortSchedule::new(&[0.02_f64, 0.025, 0.03, 0.035, 0.04]).unwrap();
/// assert_eq!(cohort.len(), 5);
///
/// // Survival through year 2: 1 - (0.02 + 0.025)
/// let surv = cohort.survival_after(2).unwrap();
/// assert!((surv - 0.955).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CohortSchedule<T: Float> {
    /// Marginal default probability for year `i + 1`.
    marginal: Vec<T>,
}

impl<T: Float> CohortSchedule<T> {
    /// Construct a cohort schedule from per-year marginal default
    /// probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InsufficientData`] for an empty vector
    /// and [`MarketDataError::InvalidProbability`] when a marginal lies
    /// outside [0, 1] or a prefix sum exceeds 1.
    pub fn new(marginal: &[T]) -> Result<Self, MarketDataError> {
        if marginal.is_empty() {
            return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
        }

        let tolerance = T::from(1e-12).unwrap_or_else(T::zero);
        let mut cumulative = T::zero();
        for &p in marginal {
            if p < T::zero() || p > T::one() {
                return Err(MarketDataError::InvalidProbability {
                    value: p.to_f64().unwrap_or(0.0),
                });
            }
            cumulative = cumulative + p;
            if cumulative > T::one() + tolerance {
                return Err(MarketDataError::InvalidProbability {
                    value: cumulative.to_f64().unwrap_or(0.0),
                });
            }
        }

        Ok(Self {
            marginal: marginal.to_vec(),
        })
    }

    /// Number of years covered by the schedule.
    #[inline]
    pub fn len(&self) -> usize {
        self.marginal.len()
    }

    /// Check whether the schedule is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marginal.is_empty()
    }

    /// Marginal default probability for year `year` (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::OutOfBounds`] for year 0 or a year past
    /// the end of the schedule.
    pub fn marginal_default(&self, year: usize) -> Result<T, MarketDataError> {
        if year == 0 || year > self.marginal.len() {
            return Err(MarketDataError::OutOfBounds {
                x: year as f64,
                min: 1.0,
                max: self.marginal.len() as f64,
            });
        }
        Ok(self.marginal[year - 1])
    }

    /// Survival probability through the end of year `years`:
    /// `1 - Σ defaults[0..years]`. `years == 0` returns 1.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InsufficientData`] when the schedule is
    /// shorter than `years`; callers must surface this rather than
    /// silently truncate the horizon.
    pub fn survival_after(&self, years: usize) -> Result<T, MarketDataError> {
        if years > self.marginal.len() {
            return Err(MarketDataError::InsufficientData {
                got: self.marginal.len(),
                need: years,
            });
        }
        let cumulative = self.marginal[..years]
            .iter()
            .fold(T::zero(), |acc, &p| acc + p);
        Ok(T::one() - cumulative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn schedule() -> CohortSchedule<f64> {
        CohortSchedule::new(&[0.02, 0.025, 0.03, 0.035, 0.04]).unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        let empty: [f64; 0] = [];
        assert!(CohortSchedule::new(&empty).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range_probability() {
        assert!(CohortSchedule::new(&[0.02_f64, 1.2]).is_err());
        assert!(CohortSchedule::new(&[-0.01_f64]).is_err());
    }

    #[test]
    fn test_new_rejects_prefix_sum_above_one() {
        assert!(CohortSchedule::new(&[0.6_f64, 0.5]).is_err());
    }

    #[test]
    fn test_marginal_default_lookup() {
        let cohort = schedule();
        assert_relative_eq!(cohort.marginal_default(1).unwrap(), 0.02, epsilon = 1e-12);
        assert_relative_eq!(cohort.marginal_default(5).unwrap(), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_marginal_default_out_of_bounds() {
        let cohort = schedule();
        assert!(cohort.marginal_default(0).is_err());
        assert!(cohort.marginal_default(6).is_err());
    }

    #[test]
    fn test_survival_after() {
        let cohort = schedule();
        assert_relative_eq!(cohort.survival_after(0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(cohort.survival_after(2).unwrap(), 0.955, epsilon = 1e-12);
        assert_relative_eq!(cohort.survival_after(5).unwrap(), 0.85, epsilon = 1e-12);
    }

    #[test]
    fn test_survival_after_past_horizon_fails() {
        let cohort = schedule();
        let err = cohort.survival_after(6).unwrap_err();
        assert_eq!(err, MarketDataError::InsufficientData { got: 5, need: 6 });
    }

    #[test]
    fn test_survival_is_non_increasing() {
        let cohort = schedule();
        let mut prev = 1.0;
        for y in 1..=5 {
            let s = cohort.survival_after(y).unwrap();
            assert!(s <= prev);
            prev = s;
        }
    }
}
