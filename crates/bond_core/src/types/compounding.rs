//! Compounding convention enumeration.
//!
//! Replaces string-tagged convention dispatch with a closed enum where
//! each variant carries its own discounting formula. Unknown tags fail
//! fast at parse time instead of falling through string comparisons.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::PricingError;

/// Compounding convention for present-value calculations.
///
/// # Examples
///
/// ```
/// use bond_core::types::Compounding;
///
/// let pv = Compounding::Continuous.present_value(100.0_f64, 0.04, 1.0);
/// assert!((pv - 100.0 * (-0.04_f64).exp()).abs() < 1e-12);
///
/// let pv = Compounding::Annual.present_value(100.0_f64, 0.04, 1.0);
/// assert!((pv - 100.0 / 1.04).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compounding {
    /// Annual compounding: `N / (1 + r)^t`.
    Annual,
    /// Semi-annual compounding: `N / (1 + r/2)^(2t)`.
    SemiAnnual,
    /// Continuous compounding: `N · exp(-r·t)`.
    Continuous,
}

impl Compounding {
    /// Present value of `notional` due in `ttm` years at rate `rate`.
    ///
    /// # Arguments
    ///
    /// * `notional` - Amount due at maturity
    /// * `rate` - Annualised interest rate
    /// * `ttm` - Time to maturity in years
    #[inline]
    pub fn present_value<T: Float>(&self, notional: T, rate: T, ttm: T) -> T {
        let one = T::one();
        let two = one + one;
        match self {
            Compounding::Annual => notional / (one + rate).powf(ttm),
            Compounding::SemiAnnual => notional / (one + rate / two).powf(two * ttm),
            Compounding::Continuous => notional * (-rate * ttm).exp(),
        }
    }

    /// Returns the standard name for this convention.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Compounding::Annual => "annual",
            Compounding::SemiAnnual => "semi-annual",
            Compounding::Continuous => "continuous",
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Compounding {
    type Err = PricingError;

    /// Parses a convention tag (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnsupportedConvention`] for unknown tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "annual" => Ok(Compounding::Annual),
            "semiannual" => Ok(Compounding::SemiAnnual),
            "continuous" => Ok(Compounding::Continuous),
            _ => Err(PricingError::UnsupportedConvention(s.to_string())),
        }
    }
}
