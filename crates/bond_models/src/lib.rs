//! # bond_models: Instruments and Deterministic Pricers
//!
//! ## Layer 2 (Instruments) Role
//!
//! Builds on `bond_core` curves to define bond instruments and the
//! deterministic (non-Monte-Carlo) valuation models:
//! - Instrument definitions: `BondTerms`, `Frequency`, `CallSchedule`
//!   (`instruments`)
//! - Survival-probability bond pricer with optional cash-flow ledger
//!   (`pricing::survival`)
//! - Rating-cohort default-probability pricer (`pricing::cohort`)
//! - Zero-coupon valuation under explicit compounding conventions
//!   (`pricing::zero`)
//!
//! All pricers are pure, synchronous functions over immutable inputs;
//! invalid configuration is rejected before any accumulation begins.
//!
//! ## Example
//!
//! ```
//! use bond_core::market_data::curves::{FlatCurve, FlatHazardCurve};
//! use bond_models::instruments::{BondTerms, Frequency};
//! use bond_models::pricing::SurvivalBondPricer;
//!
//! let terms = BondTerms::new(100.0_f64, 0.05, 5.0, Frequency::SemiAnnual).unwrap();
//! let discount = FlatCurve::new(0.03);
//! let credit = FlatHazardCurve::new(0.15);
//!
//! let pricer = SurvivalBondPricer::new(&discount, &credit);
//! let npv = pricer.price(&terms, 0.4).unwrap();
//! assert!(npv > 0.0 && npv < 100.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod pricing;
