//! Fixed-coupon bond terms.

use bond_core::types::PricingError;
use num_traits::Float;

use super::Frequency;

/// Tolerance, in period units, for deciding whether a maturity is a
/// whole number of coupon periods.
const GRID_TOL: f64 = 1e-9;

/// Immutable terms of a fixed-coupon bond.
///
/// Validated at construction; every pricing call owns its terms so there
/// is no process-wide mutable state.
///
/// # Example
///
/// ```
/// use bond_models::instruments::{BondTerms, Frequency};
///
/// let terms = BondTerms::new(100.0_f64, 0.05, 5.0, Frequency::SemiAnnual).unwrap();
/// assert_eq!(terms.coupon_per_period(), 2.5);
/// assert_eq!(terms.n_periods(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondTerms<T: Float> {
    /// Face (par) value, repaid at maturity.
    face_value: T,
    /// Annualised coupon rate.
    coupon_rate: T,
    /// Time to maturity in years.
    years: T,
    /// Coupon payment frequency.
    frequency: Frequency,
}

impl<T: Float> BondTerms<T> {
    /// Construct validated bond terms.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when the face value or
    /// maturity is not strictly positive, the coupon rate is negative,
    /// or any input is non-finite.
    pub fn new(
        face_value: T,
        coupon_rate: T,
        years: T,
        frequency: Frequency,
    ) -> Result<Self, PricingError> {
        if !face_value.is_finite() || face_value <= T::zero() {
            return Err(PricingError::InvalidParameter {
                name: "face_value",
                reason: format!("{} is not strictly positive", float_str(face_value)),
            });
        }
        if !coupon_rate.is_finite() || coupon_rate < T::zero() {
            return Err(PricingError::InvalidParameter {
                name: "coupon_rate",
                reason: format!("{} is negative or non-finite", float_str(coupon_rate)),
            });
        }
        if !years.is_finite() || years <= T::zero() {
            return Err(PricingError::InvalidParameter {
                name: "years",
                reason: format!("{} is not strictly positive", float_str(years)),
            });
        }
        Ok(Self {
            face_value,
            coupon_rate,
            years,
            frequency,
        })
    }

    /// Face value.
    #[inline]
    pub fn face_value(&self) -> T {
        self.face_value
    }

    /// Annualised coupon rate.
    #[inline]
    pub fn coupon_rate(&self) -> T {
        self.coupon_rate
    }

    /// Time to maturity in years.
    #[inline]
    pub fn years(&self) -> T {
        self.years
    }

    /// Coupon payment frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Coupon amount per period: `face_value · coupon_rate / frequency`.
    #[inline]
    pub fn coupon_per_period(&self) -> T {
        let f = T::from(self.frequency.periods_per_year()).unwrap_or_else(T::one);
        self.face_value * self.coupon_rate / f
    }

    /// Period length `dt = 1 / frequency` in years.
    #[inline]
    pub fn period_length(&self) -> T {
        self.frequency.period_length()
    }

    /// Number of whole coupon periods fitting inside the maturity.
    fn whole_periods(&self) -> usize {
        let f = self.frequency.periods_per_year() as f64;
        let periods = self.years.to_f64().unwrap_or(0.0) * f;
        (periods + GRID_TOL).floor() as usize
    }

    /// Whether a short final stub remains after `whole` periods.
    fn has_stub(&self, whole: usize) -> bool {
        let f = self.frequency.periods_per_year() as f64;
        let periods = self.years.to_f64().unwrap_or(0.0) * f;
        periods - whole as f64 > GRID_TOL
    }

    /// Number of coupon payments to maturity: the whole periods inside
    /// the maturity, plus one for the final short stub when the
    /// maturity is not a whole number of periods.
    #[inline]
    pub fn n_periods(&self) -> usize {
        let whole = self.whole_periods();
        if self.has_stub(whole) {
            whole + 1
        } else {
            whole
        }
    }

    /// Coupon payment time grid `{dt, 2dt, …, years}`.
    ///
    /// The grid never extends past maturity: whole periods are laid out
    /// at multiples of `dt`, and a maturity that is not a whole number
    /// of periods gets its final payment at `years` itself.
    pub fn payment_times(&self) -> Vec<T> {
        let dt = self.period_length();
        let whole = self.whole_periods();
        let mut times: Vec<T> = (1..=whole)
            .map(|i| T::from(i).unwrap_or_else(T::one) * dt)
            .collect();
        if self.has_stub(whole) {
            times.push(self.years);
        }
        times
    }

    /// Number of whole years to maturity (annual pricing horizon).
    #[inline]
    pub fn whole_years(&self) -> usize {
        self.years.floor().to_f64().unwrap_or(0.0) as usize
    }
}

fn float_str<T: Float>(v: T) -> String {
    format!("{}", v.to_f64().unwrap_or(f64::NAN))
}
