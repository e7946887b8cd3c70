//! Survival-probability bond pricer.
//!
//! Values a defaultable fixed-coupon bond by decomposing it into three
//! legs over the coupon grid:
//! - a coupon leg weighted by survival to each payment date,
//! - a recovery leg paid on default within each period,
//! - the terminal face value weighted by survival to maturity.
//!
//! Per coupon date `t_i` with period start `t_{i-1}`:
//!
//! ```text
//! coupon_leg_i   = coupon · S(t_i) · df(t_i)
//! recovery_leg_i = recovery · face · (S(t_{i-1}) − S(t_i)) · df(t_i)
//! terminal       = face · S(T) · df(T)
//! ```

use std::marker::PhantomData;

use bond_core::market_data::curves::{CreditCurve, DiscountCurve};
use bond_core::types::PricingError;
use num_traits::Float;

use crate::instruments::BondTerms;

/// One row of the cash-flow ledger produced by
/// [`SurvivalBondPricer::price_with_ledger`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedgerEntry<T: Float> {
    /// Payment time in years.
    pub t: T,
    /// Survival probability to `t`.
    pub survival: T,
    /// Probability of default within the period ending at `t`.
    pub default_prob: T,
    /// Discount factor to `t`.
    pub discount: T,
    /// Discounted survival-weighted coupon for this period.
    pub coupon_leg: T,
    /// Discounted recovery payment for default in this period.
    pub recovery_leg: T,
    /// Running NPV including this row.
    pub cumulative_npv: T,
}

/// Per-period cash-flow ledger with the terminal redemption row last.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashflowLedger<T: Float> {
    /// One row per coupon date, then one terminal row at maturity.
    pub entries: Vec<LedgerEntry<T>>,
    /// Total NPV, equal to the last row's `cumulative_npv`.
    pub npv: T,
}

/// Defaultable bond pricer over a discount curve and a credit curve.
///
/// Borrows both curves so one pricer can value many bonds against the
/// same market snapshot without cloning curve state.
#[derive(Debug, Clone, Copy)]
pub struct SurvivalBondPricer<'a, T, D, C>
where
    T: Float,
    D: DiscountCurve<T>,
    C: CreditCurve<T>,
{
    discount: &'a D,
    credit: &'a C,
    _marker: PhantomData<T>,
}

impl<'a, T, D, C> SurvivalBondPricer<'a, T, D, C>
where
    T: Float,
    D: DiscountCurve<T>,
    C: CreditCurve<T>,
{
    /// Create a pricer over the given discount and credit curves.
    pub fn new(discount: &'a D, credit: &'a C) -> Self {
        Self {
            discount,
            credit,
            _marker: PhantomData,
        }
    }

    /// Net present value of the bond.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] when `recovery` lies
    /// outside `[0, 1]`, or propagates curve evaluation failures.
    pub fn price(&self, terms: &BondTerms<T>, recovery: T) -> Result<T, PricingError> {
        self.accumulate(terms, recovery, None)
    }

    /// Net present value together with the per-period cash-flow ledger.
    ///
    /// The ledger has one row per coupon date plus a terminal row at
    /// maturity whose `cumulative_npv` includes the discounted
    /// redemption and equals the returned total.
    pub fn price_with_ledger(
        &self,
        terms: &BondTerms<T>,
        recovery: T,
    ) -> Result<CashflowLedger<T>, PricingError> {
        let mut entries = Vec::with_capacity(terms.n_periods() + 1);
        let npv = self.accumulate(terms, recovery, Some(&mut entries))?;
        Ok(CashflowLedger { entries, npv })
    }

    /// Present value of the recovery legs alone: no coupons, no
    /// principal. This is the distressed, no-further-accrual valuation.
    pub fn recovery_only_price(
        &self,
        terms: &BondTerms<T>,
        recovery: T,
    ) -> Result<T, PricingError> {
        validate_recovery(recovery)?;

        let face = terms.face_value();
        let mut npv = T::zero();
        let mut prev_t = T::zero();
        for t in terms.payment_times() {
            let default_prob = self.credit.interval_default_probability(prev_t, t)?;
            let discount = self.discount.discount_factor(t)?;
            npv = npv + recovery * face * default_prob * discount;
            prev_t = t;
        }
        Ok(npv)
    }

    /// Value of the bond immediately after a default event: the
    /// recovery fraction of face, with no further coupons.
    pub fn defaulted_value(&self, terms: &BondTerms<T>, recovery: T) -> Result<T, PricingError> {
        validate_recovery(recovery)?;
        Ok(recovery * terms.face_value())
    }

    fn accumulate(
        &self,
        terms: &BondTerms<T>,
        recovery: T,
        mut ledger: Option<&mut Vec<LedgerEntry<T>>>,
    ) -> Result<T, PricingError> {
        validate_recovery(recovery)?;

        let coupon = terms.coupon_per_period();
        let face = terms.face_value();
        let mut npv = T::zero();
        let mut prev_t = T::zero();

        for t in terms.payment_times() {
            let survival = self.credit.survival_probability(t)?;
            let default_prob = self
                .credit
                .interval_default_probability(prev_t, t)?;
            let discount = self.discount.discount_factor(t)?;

            let coupon_leg = coupon * survival * discount;
            let recovery_leg = recovery * face * default_prob * discount;
            npv = npv + coupon_leg + recovery_leg;

            if let Some(rows) = ledger.as_deref_mut() {
                rows.push(LedgerEntry {
                    t,
                    survival,
                    default_prob,
                    discount,
                    coupon_leg,
                    recovery_leg,
                    cumulative_npv: npv,
                });
            }

            prev_t = t;
        }

        // Terminal redemption at maturity, conditional on survival.
        let maturity = terms.years();
        let terminal_survival = self.credit.survival_probability(maturity)?;
        let terminal_discount = self.discount.discount_factor(maturity)?;
        let terminal = face * terminal_survival * terminal_discount;
        npv = npv + terminal;

        // Terminal row: the principal shows up in the cumulative NPV,
        // not in the coupon or recovery columns.
        if let Some(rows) = ledger.as_deref_mut() {
            rows.push(LedgerEntry {
                t: maturity,
                survival: terminal_survival,
                default_prob: T::zero(),
                discount: terminal_discount,
                coupon_leg: T::zero(),
                recovery_leg: T::zero(),
                cumulative_npv: npv,
            });
        }

        Ok(npv)
    }
}

fn validate_recovery<T: Float>(recovery: T) -> Result<(), PricingError> {
    if !recovery.is_finite() || recovery < T::zero() || recovery > T::one() {
        return Err(PricingError::InvalidParameter {
            name: "recovery",
            reason: format!(
                "{} is outside [0, 1]",
                recovery.to_f64().unwrap_or(f64::NAN)
            ),
        });
    }
    Ok(())
}
