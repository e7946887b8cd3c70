//! Clean PnL waterfall.
//!
//! Explains the day-over-day change of a bond position with a fixed
//! revaluation ladder. With `f(rate, ttm)` the unit valuation function,
//! `q` the position size and `cash` the cash flows received during the
//! day:
//!
//! ```text
//! V1 = q_prev · f(r_prev, ttm_prev)     yesterday, as marked
//! V2 = q_prev · f(r_prev, ttm_curr)     time rolled forward only
//! V3 = q_prev · f(r_curr, ttm_curr)     market moved
//! V4 = q_curr · f(r_curr, ttm_curr)     position as held today
//!
//! theta         = V2 − V1
//! hypothetical  = V3 − V2
//! position      = V4 − V3 + cash
//! comprehensive = V4 − V1 + cash
//! ```
//!
//! The three attributed pieces sum to the comprehensive PnL exactly;
//! nothing is left unexplained.

use bond_core::types::{Compounding, PricingError};
use bond_models::pricing::zero_coupon_value;

/// A market snapshot: the valuation rate and remaining time to
/// maturity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketState {
    /// Valuation rate.
    pub rate: f64,
    /// Time to maturity in years.
    pub ttm: f64,
}

impl MarketState {
    /// Creates a market state.
    #[inline]
    pub fn new(rate: f64, ttm: f64) -> Self {
        Self { rate, ttm }
    }
}

/// The inputs to one day's PnL explanation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PnlScenario {
    prev: MarketState,
    curr: MarketState,
    prev_quantity: f64,
    curr_quantity: f64,
    cash_flows: f64,
}

impl PnlScenario {
    /// Creates a validated scenario.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when either time to
    /// maturity is negative, time runs backwards between the two
    /// states, or any input is non-finite.
    pub fn new(
        prev: MarketState,
        curr: MarketState,
        prev_quantity: f64,
        curr_quantity: f64,
        cash_flows: f64,
    ) -> Result<Self, PricingError> {
        for (name, value) in [
            ("prev.rate", prev.rate),
            ("curr.rate", curr.rate),
            ("prev_quantity", prev_quantity),
            ("curr_quantity", curr_quantity),
            ("cash_flows", cash_flows),
        ] {
            if !value.is_finite() {
                return Err(PricingError::InvalidParameter {
                    name: "scenario",
                    reason: format!("{} must be finite, got {}", name, value),
                });
            }
        }
        if !prev.ttm.is_finite() || prev.ttm < 0.0 || !curr.ttm.is_finite() || curr.ttm < 0.0 {
            return Err(PricingError::InvalidParameter {
                name: "ttm",
                reason: "times to maturity must be finite and non-negative".to_string(),
            });
        }
        if curr.ttm > prev.ttm {
            return Err(PricingError::InvalidParameter {
                name: "ttm",
                reason: format!(
                    "time to maturity cannot increase ({} -> {})",
                    prev.ttm, curr.ttm
                ),
            });
        }
        Ok(Self {
            prev,
            curr,
            prev_quantity,
            curr_quantity,
            cash_flows,
        })
    }

    /// Yesterday's market state.
    #[inline]
    pub fn prev(&self) -> MarketState {
        self.prev
    }

    /// Today's market state.
    #[inline]
    pub fn curr(&self) -> MarketState {
        self.curr
    }

    /// Runs the revaluation ladder with the given unit valuation
    /// function and returns the attribution.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the valuation function.
    pub fn decompose<F>(&self, value_fn: F) -> Result<PnlAttribution, PricingError>
    where
        F: Fn(f64, f64) -> Result<f64, PricingError>,
    {
        let v1 = self.prev_quantity * value_fn(self.prev.rate, self.prev.ttm)?;
        let v2 = self.prev_quantity * value_fn(self.prev.rate, self.curr.ttm)?;
        let v3 = self.prev_quantity * value_fn(self.curr.rate, self.curr.ttm)?;
        let v4 = self.curr_quantity * value_fn(self.curr.rate, self.curr.ttm)?;

        Ok(PnlAttribution {
            v_prev: v1,
            v_theta: v2,
            v_market: v3,
            v_position: v4,
            theta: v2 - v1,
            hypothetical: v3 - v2,
            position: v4 - v3 + self.cash_flows,
            comprehensive: v4 - v1 + self.cash_flows,
        })
    }

    /// Runs the ladder for a zero-coupon bond of the given notional
    /// under the given compounding convention.
    pub fn decompose_zero_coupon(
        &self,
        notional: f64,
        compounding: Compounding,
    ) -> Result<PnlAttribution, PricingError> {
        self.decompose(|rate, ttm| zero_coupon_value(notional, rate, ttm, compounding))
    }
}

/// The revaluation ladder and the attributed PnL pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlAttribution {
    /// Position value in yesterday's state.
    pub v_prev: f64,
    /// Position value with time rolled forward only.
    pub v_theta: f64,
    /// Position value with today's market applied.
    pub v_market: f64,
    /// Value of today's position in today's state.
    pub v_position: f64,
    /// Pure time decay.
    pub theta: f64,
    /// Market move at constant position.
    pub hypothetical: f64,
    /// Position changes plus cash received.
    pub position: f64,
    /// Total explained PnL.
    pub comprehensive: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bond_core::types::Compounding;
    use bond_models::pricing::zero_coupon_value;
    use proptest::prelude::*;

    const ONE_DAY: f64 = 1.0 / 252.0;

    fn zero_fn(rate: f64, ttm: f64) -> Result<f64, PricingError> {
        zero_coupon_value(100.0, rate, ttm, Compounding::Continuous)
    }

    #[test]
    fn test_waterfall_is_additive() {
        let scenario = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.05, 1.0 - ONE_DAY),
            10.0,
            12.0,
            3.5,
        )
        .unwrap();
        let att = scenario.decompose(zero_fn).unwrap();

        assert_relative_eq!(
            att.theta + att.hypothetical + att.position,
            att.comprehensive,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_pure_time_roll_is_all_theta() {
        let scenario = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.04, 1.0 - ONE_DAY),
            10.0,
            10.0,
            0.0,
        )
        .unwrap();
        let att = scenario.decompose(zero_fn).unwrap();

        assert!(att.theta > 0.0); // pull to par under positive rates
        assert_relative_eq!(att.hypothetical, 0.0, epsilon = 1e-12);
        assert_relative_eq!(att.position, 0.0, epsilon = 1e-12);
        assert_relative_eq!(att.comprehensive, att.theta, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_rise_gives_negative_hypothetical() {
        let scenario = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.06, 1.0 - ONE_DAY),
            10.0,
            10.0,
            0.0,
        )
        .unwrap();
        let att = scenario.decompose(zero_fn).unwrap();
        assert!(att.hypothetical < 0.0);
    }

    #[test]
    fn test_position_increase_shows_in_position_term() {
        let scenario = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.04, 1.0 - ONE_DAY),
            10.0,
            15.0,
            0.0,
        )
        .unwrap();
        let att = scenario.decompose(zero_fn).unwrap();
        let unit = zero_fn(0.04, 1.0 - ONE_DAY).unwrap();
        assert_relative_eq!(att.position, 5.0 * unit, epsilon = 1e-9);
    }

    #[test]
    fn test_cash_flows_enter_position_and_comprehensive() {
        let base = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.05, 1.0 - ONE_DAY),
            10.0,
            10.0,
            0.0,
        )
        .unwrap();
        let with_cash = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.05, 1.0 - ONE_DAY),
            10.0,
            10.0,
            2.5,
        )
        .unwrap();
        let a = base.decompose(zero_fn).unwrap();
        let b = with_cash.decompose(zero_fn).unwrap();
        assert_relative_eq!(b.position - a.position, 2.5, epsilon = 1e-12);
        assert_relative_eq!(b.comprehensive - a.comprehensive, 2.5, epsilon = 1e-12);
        assert_relative_eq!(b.theta, a.theta, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_coupon_convenience_matches_closure() {
        let scenario = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.05, 1.0 - ONE_DAY),
            10.0,
            10.0,
            0.0,
        )
        .unwrap();
        let direct = scenario.decompose(zero_fn).unwrap();
        let wrapped = scenario
            .decompose_zero_coupon(100.0, Compounding::Continuous)
            .unwrap();
        assert_relative_eq!(wrapped.comprehensive, direct.comprehensive, epsilon = 1e-12);
        assert_relative_eq!(wrapped.theta, direct.theta, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_time_running_backwards() {
        let result = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.04, 1.5),
            10.0,
            10.0,
            0.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        let result = PnlScenario::new(
            MarketState::new(f64::NAN, 1.0),
            MarketState::new(0.04, 0.9),
            10.0,
            10.0,
            0.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_valuation_error_propagates() {
        let scenario = PnlScenario::new(
            MarketState::new(0.04, 1.0),
            MarketState::new(0.05, 1.0 - ONE_DAY),
            10.0,
            10.0,
            0.0,
        )
        .unwrap();
        let result = scenario.decompose(|_, _| {
            Err(PricingError::NumericDegeneracy("forced failure".to_string()))
        });
        assert!(result.is_err());
    }

    proptest! {
        /// Additivity holds for arbitrary scenarios.
        #[test]
        fn prop_waterfall_additivity(
            r_prev in 0.001_f64..0.15,
            r_curr in 0.001_f64..0.15,
            ttm in 0.1_f64..10.0,
            q_prev in -100.0_f64..100.0,
            q_curr in -100.0_f64..100.0,
            cash in -50.0_f64..50.0,
        ) {
            let scenario = PnlScenario::new(
                MarketState::new(r_prev, ttm),
                MarketState::new(r_curr, (ttm - ONE_DAY).max(0.0)),
                q_prev,
                q_curr,
                cash,
            ).unwrap();
            let att = scenario.decompose(zero_fn).unwrap();
            prop_assert!(
                (att.theta + att.hypothetical + att.position - att.comprehensive).abs() < 1e-9
            );
        }
    }
}
