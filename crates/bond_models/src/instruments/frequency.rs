//! Coupon payment frequency enumeration.

use std::fmt;
use std::str::FromStr;

use bond_core::types::PricingError;

/// Coupon payment frequency.
///
/// The engine supports the standard bond coupon conventions of 1, 2, 4
/// or 12 periods per year.
///
/// # Examples
///
/// ```
/// use bond_models::instruments::Frequency;
///
/// let freq = Frequency::SemiAnnual;
/// assert_eq!(freq.periods_per_year(), 2);
/// assert_eq!(freq.period_length::<f64>(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// Annual coupons (once per year).
    Annual,
    /// Semi-annual coupons (twice per year).
    SemiAnnual,
    /// Quarterly coupons (four times per year).
    Quarterly,
    /// Monthly coupons (twelve times per year).
    Monthly,
}

impl Frequency {
    /// Returns the number of coupon periods per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the period length `dt = 1 / frequency` in years.
    #[inline]
    pub fn period_length<T: num_traits::Float>(&self) -> T {
        T::one() / T::from(self.periods_per_year()).unwrap_or_else(T::one)
    }

    /// Returns the standard name for this frequency.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = PricingError;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported tags: "annual"/"1", "semi-annual"/"2", "quarterly"/"4",
    /// "monthly"/"12".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "annual" | "1" => Ok(Frequency::Annual),
            "semiannual" | "2" => Ok(Frequency::SemiAnnual),
            "quarterly" | "4" => Ok(Frequency::Quarterly),
            "monthly" | "12" => Ok(Frequency::Monthly),
            _ => Err(PricingError::InvalidParameter {
                name: "frequency",
                reason: format!("unknown frequency: {}", s),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_period_length() {
        assert_eq!(Frequency::SemiAnnual.period_length::<f64>(), 0.5);
        assert_eq!(Frequency::Quarterly.period_length::<f64>(), 0.25);
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("annual".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert_eq!(
            "Semi-Annual".parse::<Frequency>().unwrap(),
            Frequency::SemiAnnual
        );
        assert_eq!("4".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("weekly".parse::<Frequency>().is_err());
        assert!("3".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Frequency::SemiAnnual), "Semi-Annual");
    }
}
