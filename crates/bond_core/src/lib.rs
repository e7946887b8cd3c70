//! # bond_core: Foundation for Credit-Risk Bond Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! bond_core is the bottom layer of the workspace, providing:
//! - Discount and credit curve abstractions (`market_data::curves`)
//! - Rating-cohort default schedules (`market_data::cohort`)
//! - Compounding conventions (`types::compounding`)
//! - Error types: `PricingError`, `MarketDataError` (`types`, `market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other bond_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use bond_core::market_data::curves::{CreditCurve, DiscountCurve, FlatCurve, FlatHazardCurve};
//!
//! let discount = FlatCurve::new(0.03_f64);
//! let credit = FlatHazardCurve::new(0.15_f64);
//!
//! let df = discount.discount_factor(1.0).unwrap();
//! let surv = credit.survival_probability(1.0).unwrap();
//! assert!(df < 1.0 && surv < 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for conventions and schedules

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
