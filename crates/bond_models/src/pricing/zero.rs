//! Zero-coupon bond valuation under explicit compounding conventions.

use bond_core::types::{Compounding, PricingError};
use num_traits::Float;

/// Present value of a single notional paid at `ttm` years, discounted
/// at `rate` under the given compounding convention.
///
/// # Errors
///
/// Returns [`PricingError::InvalidParameter`] when the notional is not
/// strictly positive, the time to maturity is negative, or any input is
/// non-finite.
///
/// # Example
///
/// ```
/// use bond_core::types::Compounding;
/// use bond_models::pricing::zero_coupon_value;
///
/// let pv = zero_coupon_value(100.0_f64, 0.04, 1.0, Compounding::Continuous).unwrap();
/// assert!((pv - 100.0 * (-0.04_f64).exp()).abs() < 1e-12);
/// ```
pub fn zero_coupon_value<T: Float>(
    notional: T,
    rate: T,
    ttm: T,
    compounding: Compounding,
) -> Result<T, PricingError> {
    if !notional.is_finite() || notional <= T::zero() {
        return Err(PricingError::InvalidParameter {
            name: "notional",
            reason: format!(
                "{} is not strictly positive",
                notional.to_f64().unwrap_or(f64::NAN)
            ),
        });
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidParameter {
            name: "rate",
            reason: "rate must be finite".to_string(),
        });
    }
    if !ttm.is_finite() || ttm < T::zero() {
        return Err(PricingError::InvalidParameter {
            name: "ttm",
            reason: format!(
                "{} is negative or non-finite",
                ttm.to_f64().unwrap_or(f64::NAN)
            ),
        });
    }
    Ok(compounding.present_value(notional, rate, ttm))
}
