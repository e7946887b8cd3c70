//! One-trading-day theta for survival-priced coupon bonds.
//!
//! Revalues the bond today and one trading day later, holding both
//! curves fixed. Every payment date moves one day closer; any payment
//! whose shifted date is non-positive has already been paid and drops
//! out of the grid.

use bond_core::market_data::curves::{CreditCurve, DiscountCurve};
use bond_core::types::PricingError;
use bond_models::instruments::BondTerms;

/// Trading-day count used for the one-day shift.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// One-trading-day theta of a survival-priced coupon bond: the value
/// change from holding the curves fixed and rolling the calendar
/// forward by `1/252` years.
///
/// Positive under positive rates (pull to par).
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] for a recovery outside
/// `[0, 1]`, [`PricingError::NumericDegeneracy`] when no payments
/// remain after the shift, or propagates curve failures.
pub fn one_day_theta<D, C>(
    terms: &BondTerms<f64>,
    discount: &D,
    credit: &C,
    recovery: f64,
) -> Result<f64, PricingError>
where
    D: DiscountCurve<f64>,
    C: CreditCurve<f64>,
{
    if !recovery.is_finite() || !(0.0..=1.0).contains(&recovery) {
        return Err(PricingError::InvalidParameter {
            name: "recovery",
            reason: format!("{} is outside [0, 1]", recovery),
        });
    }
    let day = 1.0 / TRADING_DAYS_PER_YEAR;
    let base = shifted_value(terms, discount, credit, recovery, 0.0)?;
    let shifted = shifted_value(terms, discount, credit, recovery, day)?;
    Ok(shifted - base)
}

/// Survival-bond value with every payment date brought forward by
/// `shift` years. Payments with non-positive shifted dates are dropped.
fn shifted_value<D, C>(
    terms: &BondTerms<f64>,
    discount: &D,
    credit: &C,
    recovery: f64,
    shift: f64,
) -> Result<f64, PricingError>
where
    D: DiscountCurve<f64>,
    C: CreditCurve<f64>,
{
    let coupon = terms.coupon_per_period();
    let face = terms.face_value();
    let mut value = 0.0;
    let mut prev_t = 0.0;
    let mut any = false;

    for t in terms.payment_times() {
        let shifted = t - shift;
        if shifted <= 0.0 {
            continue;
        }
        let survival = credit.survival_probability(shifted)?;
        let default_prob = credit.interval_default_probability(prev_t, shifted)?;
        let df = discount.discount_factor(shifted)?;
        value += coupon * survival * df;
        value += recovery * face * default_prob * df;
        prev_t = shifted;
        any = true;
    }

    let redemption = terms.years() - shift;
    if redemption > 0.0 {
        value += face
            * credit.survival_probability(redemption)?
            * discount.discount_factor(redemption)?;
        any = true;
    }

    if !any {
        return Err(PricingError::NumericDegeneracy(
            "no cash flows remain after the time shift".to_string(),
        ));
    }
    Ok(value)
}
