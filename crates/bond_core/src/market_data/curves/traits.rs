//! Discount curve trait.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic discount curve for present-value calculations.
///
/// All implementations are generic over `T: Float` so the same curve can
/// be used with `f64` or `f32`.
///
/// # Contract
///
/// - `discount_factor(0) = 1`
/// - `discount_factor(t)` is positive for all valid `t`
pub trait DiscountCurve<T: Float> {
    /// Return the discount factor for maturity `t` (years).
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InvalidMaturity`] if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InvalidMaturity`] if `t <= 0`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError>;
}
