//! OAS-based callable bond pricing over simulated short-rate paths.
//!
//! Each path discounts the bond's cash flows with the path's own rates
//! plus a constant option-adjusted spread (OAS):
//!
//! ```text
//! df(t_i) = exp(−∫₀^{t_i} r(s) ds − oas · t_i)
//! ```
//!
//! On call dates the issuer may redeem the bond at the scheduled call
//! price; a called path pays the call price and nothing further. The
//! coupon due on the call date itself is not received. The ensemble
//! mean over paths is the price, with the standard error of the mean
//! reported alongside it.

use rayon::prelude::*;

use bond_core::types::PricingError;
use bond_models::instruments::{BondTerms, CallSchedule};

use super::config::SimulationConfig;
use super::paths::{generate_short_rate_paths, RatePathSet, ShortRateParams};

/// Issuer exercise rule applied on each call date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExercisePolicy {
    /// Call at the first call date reached with a discount factor below
    /// par, which under positive rates means the first eligible date.
    #[default]
    FirstEligibleDate,

    /// Call only when the call price is below the present value of the
    /// path's remaining cash flows, as a rational issuer would.
    PriceAdvantage,
}

/// Monte Carlo price with its sampling uncertainty.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallablePriceResult {
    /// Ensemble mean price over all paths.
    pub price: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Fraction of paths on which the bond was called.
    pub call_fraction: f64,
}

impl CallablePriceResult {
    /// 95% confidence interval for the price, `mean ± 1.96 · se`.
    #[inline]
    pub fn confidence_95(&self) -> (f64, f64) {
        let half = 1.96 * self.std_error;
        (self.price - half, self.price + half)
    }
}

/// Callable (or straight) bond pricer over lognormal short-rate paths.
#[derive(Clone, Copy, Debug)]
pub struct OasCallablePricer {
    config: SimulationConfig,
    policy: ExercisePolicy,
}

impl OasCallablePricer {
    /// Creates a pricer with the default exercise policy.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            policy: ExercisePolicy::default(),
        }
    }

    /// Creates a pricer with an explicit exercise policy.
    pub fn with_policy(config: SimulationConfig, policy: ExercisePolicy) -> Self {
        Self { config, policy }
    }

    /// Exercise policy in force.
    #[inline]
    pub fn policy(&self) -> ExercisePolicy {
        self.policy
    }

    /// Prices the bond by Monte Carlo.
    ///
    /// Pass `calls = None` to price the straight (non-callable) bond on
    /// the same paths, which is how OAS-consistent option values are
    /// backed out.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] for a non-finite OAS,
    /// a call schedule extending beyond maturity, or invalid simulation
    /// configuration.
    pub fn price(
        &self,
        terms: &BondTerms<f64>,
        calls: Option<&CallSchedule<f64>>,
        params: &ShortRateParams,
        oas: f64,
    ) -> Result<CallablePriceResult, PricingError> {
        if !oas.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "oas",
                reason: "must be finite".to_string(),
            });
        }
        if let Some(schedule) = calls {
            let last = schedule.entries().last().map(|e| e.year).unwrap_or(0.0);
            if last >= terms.years() {
                return Err(PricingError::InvalidParameter {
                    name: "call_schedule",
                    reason: "call dates must lie strictly before maturity".to_string(),
                });
            }
        }

        let paths = generate_short_rate_paths(&self.config, params, terms.years())?;
        let grid = CashflowGrid::build(terms, calls, &paths)?;

        let n_paths = paths.n_paths();
        let results: Vec<(f64, bool)> = (0..n_paths)
            .into_par_iter()
            .map(|idx| value_path(paths.path(idx), &grid, oas, self.policy))
            .collect();

        let sum: f64 = results.iter().map(|(v, _)| v).sum();
        let mean = sum / n_paths as f64;
        let sum_sq_dev: f64 = results.iter().map(|(v, _)| (v - mean) * (v - mean)).sum();
        let std_error = if n_paths > 1 {
            (sum_sq_dev / ((n_paths - 1) as f64)).sqrt() / (n_paths as f64).sqrt()
        } else {
            0.0
        };
        let called = results.iter().filter(|(_, c)| *c).count();

        Ok(CallablePriceResult {
            price: mean,
            std_error,
            call_fraction: called as f64 / n_paths as f64,
        })
    }
}

/// Cash-flow events mapped onto the simulation time grid.
struct CashflowGrid {
    /// Coupon amount due at each step (0 where no coupon falls).
    coupon_at: Vec<f64>,
    /// Call price applicable at each step, if it is a call date.
    call_at: Vec<Option<f64>>,
    face: f64,
    dt: f64,
    n_steps: usize,
}

impl CashflowGrid {
    fn build(
        terms: &BondTerms<f64>,
        calls: Option<&CallSchedule<f64>>,
        paths: &RatePathSet,
    ) -> Result<Self, PricingError> {
        let n_steps = paths.n_steps();
        let dt = paths.dt();
        let mut coupon_at = vec![0.0; n_steps + 1];
        let mut call_at = vec![None; n_steps + 1];

        let coupon = terms.coupon_per_period();
        for t in terms.payment_times() {
            let step = (t / dt).round() as usize;
            if step == 0 || step > n_steps {
                return Err(PricingError::InvalidParameter {
                    name: "steps_per_year",
                    reason: format!(
                        "grid spacing {} cannot resolve the coupon date {}",
                        dt, t
                    ),
                });
            }
            coupon_at[step] += coupon;
        }

        if let Some(schedule) = calls {
            for entry in schedule.entries() {
                let step = (entry.year / dt).round() as usize;
                if step == 0 || step >= n_steps {
                    return Err(PricingError::InvalidParameter {
                        name: "steps_per_year",
                        reason: format!(
                            "grid spacing {} cannot resolve the call date {}",
                            dt, entry.year
                        ),
                    });
                }
                call_at[step] = Some(entry.price);
            }
        }

        Ok(Self {
            coupon_at,
            call_at,
            face: terms.face_value(),
            dt,
            n_steps,
        })
    }
}

/// Values one path. Returns the discounted path value and whether the
/// bond was called.
fn value_path(path: &[f64], grid: &CashflowGrid, oas: f64, policy: ExercisePolicy) -> (f64, bool) {
    let dt = grid.dt;
    let mut integral = 0.0;
    let mut value = 0.0;
    let mut df = 1.0;

    for step in 1..=grid.n_steps {
        integral += path[step - 1] * dt;
        let t = step as f64 * dt;
        df = (-integral - oas * t).exp();

        // The call decision comes first: a called bond forfeits the
        // coupon due on the call date.
        if let Some(call_price) = grid.call_at[step] {
            let exercise = match policy {
                ExercisePolicy::FirstEligibleDate => df < 1.0,
                ExercisePolicy::PriceAdvantage => {
                    call_price < continuation_value(path, grid, oas, step, integral)
                }
            };
            if exercise {
                return (value + call_price * df, true);
            }
        }

        value += grid.coupon_at[step] * df;
    }

    (value + grid.face * df, false)
}

/// Present value, as seen from `from_step`, of the path's remaining
/// coupons and redemption, discounted with the path's own rates plus
/// the OAS.
fn continuation_value(
    path: &[f64],
    grid: &CashflowGrid,
    oas: f64,
    from_step: usize,
    integral_at_from: f64,
) -> f64 {
    let dt = grid.dt;
    let t_from = from_step as f64 * dt;
    let mut integral = integral_at_from;
    let mut value = 0.0;
    let mut df = 1.0;

    for step in (from_step + 1)..=grid.n_steps {
        integral += path[step - 1] * dt;
        let t = step as f64 * dt;
        // Discount back to the call date, not to today.
        df = (-(integral - integral_at_from) - oas * (t - t_from)).exp();
        value += grid.coupon_at[step] * df;
    }

    value + grid.face * df
}
