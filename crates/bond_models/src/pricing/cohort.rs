//! Rating-cohort bond pricer.
//!
//! Values a defaultable bond on an annual grid using empirical
//! marginal default probabilities from a rating cohort study instead of
//! a parametric hazard curve. The schedule must cover every whole year
//! of the bond's life; a short schedule is rejected up front rather
//! than silently truncating the valuation horizon.

use std::marker::PhantomData;

use bond_core::market_data::cohort::CohortSchedule;
use bond_core::market_data::curves::DiscountCurve;
use bond_core::types::PricingError;
use num_traits::Float;

use crate::instruments::BondTerms;

/// Defaultable bond pricer driven by a rating-cohort default schedule.
///
/// The coupon grid is annual regardless of the terms' stated frequency;
/// the full annual coupon `face · coupon_rate` is paid at each
/// surviving year-end.
#[derive(Debug, Clone, Copy)]
pub struct CohortBondPricer<'a, T, D>
where
    T: Float,
    D: DiscountCurve<T>,
{
    discount: &'a D,
    cohort: &'a CohortSchedule<T>,
    _marker: PhantomData<T>,
}

impl<'a, T, D> CohortBondPricer<'a, T, D>
where
    T: Float,
    D: DiscountCurve<T>,
{
    /// Create a pricer over the given discount curve and cohort
    /// schedule.
    pub fn new(discount: &'a D, cohort: &'a CohortSchedule<T>) -> Self {
        Self {
            discount,
            cohort,
            _marker: PhantomData,
        }
    }

    /// Net present value of the bond.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InsufficientCohortData`] when the
    /// schedule has fewer annual entries than the bond has whole years
    /// to maturity, [`PricingError::InvalidParameter`] for a recovery
    /// outside `[0, 1]`, or propagates discount-curve failures.
    pub fn price(&self, terms: &BondTerms<T>, recovery: T) -> Result<T, PricingError> {
        if !recovery.is_finite() || recovery < T::zero() || recovery > T::one() {
            return Err(PricingError::InvalidParameter {
                name: "recovery",
                reason: format!(
                    "{} is outside [0, 1]",
                    recovery.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }

        let need = terms.whole_years();
        if self.cohort.len() < need {
            return Err(PricingError::InsufficientCohortData {
                got: self.cohort.len(),
                need,
            });
        }

        let annual_coupon = terms.face_value() * terms.coupon_rate();
        let face = terms.face_value();
        let mut npv = T::zero();

        for year in 1..=need {
            let t = T::from(year).unwrap_or_else(T::one);
            let survival = self.cohort.survival_after(year)?;
            let marginal = self.cohort.marginal_default(year)?;
            let discount = self.discount.discount_factor(t)?;

            npv = npv + annual_coupon * survival * discount;
            npv = npv + recovery * face * marginal * discount;
        }

        let maturity = terms.years();
        let terminal_survival = self.cohort.survival_after(need)?;
        let terminal_discount = self.discount.discount_factor(maturity)?;
        npv = npv + face * terminal_survival * terminal_discount;

        Ok(npv)
    }
}
