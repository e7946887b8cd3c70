//! Deterministic bond valuation models.

pub mod cohort;
pub mod survival;
pub mod zero;

pub use cohort::CohortBondPricer;
pub use survival::{CashflowLedger, LedgerEntry, SurvivalBondPricer};
pub use zero::zero_coupon_value;
