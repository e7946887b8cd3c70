//! Credit curve abstractions for survival-based valuation.
//!
//! This module provides:
//! - [`CreditCurve`]: Generic trait for hazard rate and survival probability
//! - [`FlatHazardCurve`]: Constant hazard rate curve
//! - [`StepHazardCurve`]: Piecewise-constant hazard rate curve

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic credit curve trait for hazard rate and survival probability
/// calculations.
///
/// # Contract
///
/// - `hazard_rate(t)` returns the instantaneous hazard rate λ(t) at time t
/// - `survival_probability(t)` returns P(τ > t) = exp(-∫₀ᵗ λ(s)ds)
/// - `default_probability(t)` returns P(τ ≤ t) = 1 - P(τ > t)
///
/// # Invariants
///
/// - λ(t) ≥ 0 for all t ≥ 0
/// - P(τ > 0) = 1
/// - P(τ > t) is non-increasing in t, so interval default probabilities
///   `S(t0) - S(t1)` are never negative for `t1 ≥ t0`
pub trait CreditCurve<T: Float> {
    /// Return the instantaneous hazard rate at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InvalidMaturity`] if `t < 0`.
    fn hazard_rate(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the survival probability P(τ > t).
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InvalidMaturity`] if `t < 0`.
    fn survival_probability(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the default probability P(τ ≤ t).
    fn default_probability(&self, t: T) -> Result<T, MarketDataError> {
        Ok(T::one() - self.survival_probability(t)?)
    }

    /// Return the probability of default within `(t0, t1]`:
    /// `S(t0) - S(t1)`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InvalidMaturity`] if `t1 < t0` or
    /// either time is negative.
    fn interval_default_probability(&self, t0: T, t1: T) -> Result<T, MarketDataError> {
        if t1 < t0 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t1 - t0).to_f64().unwrap_or(0.0),
            });
        }
        let s0 = self.survival_probability(t0)?;
        let s1 = self.survival_probability(t1)?;
        Ok(s0 - s1)
    }
}

/// A flat (constant) hazard rate curve.
///
/// The same hazard rate applies to all maturities, so
/// `P(τ > t) = exp(-λ·t)`. This is the workhorse model for single-name
/// bond pricing when only one credit spread is known.
///
/// # Example
///
/// ```
/// use bond_core::market_data::curves::{CreditCurve, FlatHazardCurve};
///
/// let curve = FlatHazardCurve::new(0.01_f64);
/// let surv = curve.survival_probability(5.0).unwrap();
/// assert!((surv - (-0.05_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatHazardCurve<T: Float> {
    /// The constant hazard rate.
    hazard_rate: T,
}

impl<T: Float> FlatHazardCurve<T> {
    /// Construct a flat hazard rate curve.
    #[inline]
    pub fn new(hazard_rate: T) -> Self {
        Self { hazard_rate }
    }

    /// Return the constant hazard rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.hazard_rate
    }
}

impl<T: Float> CreditCurve<T> for FlatHazardCurve<T> {
    fn hazard_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.hazard_rate)
    }

    fn survival_probability(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.hazard_rate * t).exp())
    }
}

/// Piecewise-constant hazard rate curve.
///
/// Holds one hazard rate per time bucket of width `dt` (typically one
/// coupon period). The survival probability integrates the step function,
/// so it is continuous and non-increasing even across a regime switch
/// (e.g. a mid-life downgrade from B to CCC hazard):
///
/// ```text
/// P(τ > t) = exp(-Σ_full λᵢ·dt - λ_k·(t - k·dt))
/// ```
///
/// Beyond the last bucket the final hazard rate extrapolates flat.
#[derive(Debug, Clone, PartialEq)]
pub struct StepHazardCurve<T: Float> {
    /// Hazard rate per bucket, bucket `i` covering `[i·dt, (i+1)·dt)`.
    hazard_rates: Vec<T>,
    /// Bucket width in years.
    dt: T,
}

impl<T: Float> StepHazardCurve<T> {
    /// Construct a step hazard curve from per-bucket rates.
    ///
    /// # Arguments
    ///
    /// * `hazard_rates` - One non-negative hazard rate per bucket
    /// * `dt` - Bucket width in years (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InsufficientData`] for an empty rate
    /// vector, [`MarketDataError::InvalidMaturity`] for a non-positive
    /// `dt`, and [`MarketDataError::InvalidProbability`] for a negative
    /// hazard rate.
    pub fn new(hazard_rates: &[T], dt: T) -> Result<Self, MarketDataError> {
        if hazard_rates.is_empty() {
            return Err(MarketDataError::InsufficientData { got: 0, need: 1 });
        }
        if dt <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(0.0),
            });
        }
        for &h in hazard_rates {
            if h < T::zero() {
                return Err(MarketDataError::InvalidProbability {
                    value: h.to_f64().unwrap_or(0.0),
                });
            }
        }
        Ok(Self {
            hazard_rates: hazard_rates.to_vec(),
            dt,
        })
    }

    /// Return the number of buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.hazard_rates.len()
    }

    /// Check whether the curve has no buckets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hazard_rates.is_empty()
    }

    /// Bucket index covering time `t`, clamped to the last bucket.
    fn bucket(&self, t: T) -> usize {
        let idx = (t / self.dt).floor().to_f64().unwrap_or(0.0) as usize;
        idx.min(self.hazard_rates.len() - 1)
    }

    /// Compute the integrated hazard ∫₀ᵗ λ(s)ds over the step function.
    fn integrated_hazard(&self, t: T) -> T {
        if t <= T::zero() {
            return T::zero();
        }
        let mut integral = T::zero();
        let mut elapsed = T::zero();
        for &h in &self.hazard_rates {
            let bucket_end = elapsed + self.dt;
            if t <= bucket_end {
                return integral + h * (t - elapsed);
            }
            integral = integral + h * self.dt;
            elapsed = bucket_end;
        }
        // Flat extrapolation with the last bucket's rate.
        let last = self.hazard_rates[self.hazard_rates.len() - 1];
        integral + last * (t - elapsed)
    }
}

impl<T: Float> CreditCurve<T> for StepHazardCurve<T> {
    fn hazard_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.hazard_rates[self.bucket(t)])
    }

    fn survival_probability(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        Ok((-self.integrated_hazard(t)).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ========================================
    // FlatHazardCurve Tests
    // ========================================

    #[test]
    fn test_flat_curve_survival_at_zero() {
        let curve = FlatHazardCurve::new(0.02_f64);
        assert_relative_eq!(
            curve.survival_probability(0.0).unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_flat_curve_survival_probability() {
        let curve = FlatHazardCurve::new(0.15_f64);
        let surv = curve.survival_probability(5.0).unwrap();
        assert_relative_eq!(surv, (-0.75_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_flat_curve_survival_plus_default() {
        let curve = FlatHazardCurve::new(0.015_f64);
        let surv = curve.survival_probability(3.0).unwrap();
        let def = curve.default_probability(3.0).unwrap();
        assert_relative_eq!(surv + def, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_curve_interval_default_probability() {
        let curve = FlatHazardCurve::new(0.1_f64);
        let dp = curve.interval_default_probability(1.0, 2.0).unwrap();
        let expected = (-0.1_f64).exp() - (-0.2_f64).exp();
        assert_relative_eq!(dp, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_curve_interval_rejects_reversed_times() {
        let curve = FlatHazardCurve::new(0.1_f64);
        assert!(curve.interval_default_probability(2.0, 1.0).is_err());
    }

    #[test]
    fn test_flat_curve_negative_maturity() {
        let curve = FlatHazardCurve::new(0.1_f64);
        assert!(curve.survival_probability(-0.5).is_err());
        assert!(curve.hazard_rate(-0.5).is_err());
    }

    // ========================================
    // StepHazardCurve Tests
    // ========================================

    #[test]
    fn test_step_curve_rejects_empty() {
        let rates: [f64; 0] = [];
        assert!(StepHazardCurve::new(&rates, 0.5).is_err());
    }

    #[test]
    fn test_step_curve_rejects_negative_rate() {
        assert!(StepHazardCurve::new(&[0.05_f64, -0.01], 0.5).is_err());
    }

    #[test]
    fn test_step_curve_rejects_non_positive_dt() {
        assert!(StepHazardCurve::new(&[0.05_f64], 0.0).is_err());
    }

    #[test]
    fn test_step_curve_constant_matches_flat() {
        let step = StepHazardCurve::new(&[0.15_f64; 10], 0.5).unwrap();
        let flat = FlatHazardCurve::new(0.15_f64);
        for t in [0.25_f64, 0.5, 1.0, 3.3, 5.0] {
            assert_relative_eq!(
                step.survival_probability(t).unwrap(),
                flat.survival_probability(t).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_step_curve_hazard_lookup() {
        // B-rated first half, CCC second half of a 5y semi-annual grid.
        let mut rates = vec![0.05_f64; 5];
        rates.extend(vec![0.30_f64; 5]);
        let curve = StepHazardCurve::new(&rates, 0.5).unwrap();

        assert_relative_eq!(curve.hazard_rate(0.25).unwrap(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(curve.hazard_rate(3.0).unwrap(), 0.30, epsilon = 1e-12);
        // Flat extrapolation beyond the grid.
        assert_relative_eq!(curve.hazard_rate(10.0).unwrap(), 0.30, epsilon = 1e-12);
    }

    #[test]
    fn test_step_curve_survival_monotone_across_regime_switch() {
        let mut rates = vec![0.05_f64; 5];
        rates.extend(vec![0.30_f64; 5]);
        let curve = StepHazardCurve::new(&rates, 0.5).unwrap();

        let mut prev = 1.0;
        for i in 1..=10 {
            let t = i as f64 * 0.5;
            let surv = curve.survival_probability(t).unwrap();
            assert!(surv <= prev, "survival increased at t={}", t);
            assert!(surv > 0.0);
            prev = surv;
        }
    }

    #[test]
    fn test_step_curve_integrated_hazard_value() {
        let curve = StepHazardCurve::new(&[0.1_f64, 0.2], 1.0).unwrap();
        // ∫₀^1.5 = 0.1·1 + 0.2·0.5 = 0.2
        let surv = curve.survival_probability(1.5).unwrap();
        assert_relative_eq!(surv, (-0.2_f64).exp(), epsilon = 1e-12);
    }

    // ========================================
    // Property Tests
    // ========================================

    proptest! {
        #[test]
        fn prop_flat_survival_in_unit_interval(
            h in 0.0_f64..2.0,
            t in 0.0_f64..50.0,
        ) {
            let curve = FlatHazardCurve::new(h);
            let surv = curve.survival_probability(t).unwrap();
            prop_assert!((0.0..=1.0).contains(&surv));
        }

        #[test]
        fn prop_flat_interval_default_non_negative(
            h in 0.0_f64..2.0,
            t0 in 0.0_f64..20.0,
            width in 0.0_f64..5.0,
        ) {
            let curve = FlatHazardCurve::new(h);
            let dp = curve.interval_default_probability(t0, t0 + width).unwrap();
            prop_assert!(dp >= -1e-15);
        }

        #[test]
        fn prop_step_survival_non_increasing(
            rates in proptest::collection::vec(0.0_f64..1.0, 1..12),
            t in 0.0_f64..10.0,
            extra in 0.0_f64..5.0,
        ) {
            let curve = StepHazardCurve::new(&rates, 0.5).unwrap();
            let s1 = curve.survival_probability(t).unwrap();
            let s2 = curve.survival_probability(t + extra).unwrap();
            prop_assert!(s2 <= s1 + 1e-15);
        }
    }
}
