//! # bond_risk: PnL Attribution and Time-Decay Measures
//!
//! ## Layer 4 (Risk) Role
//!
//! Builds on `bond_core` and `bond_models` to explain day-over-day
//! value changes of bond positions:
//! - Clean PnL waterfall splitting a move into theta, market and
//!   position effects (`pnl::decompose`)
//! - One-trading-day theta for coupon bonds (`pnl::theta`)
//!
//! The waterfall is additive by construction: the attributed pieces
//! always sum back to the comprehensive PnL.
//!
//! ## Example
//!
//! ```
//! use bond_core::types::Compounding;
//! use bond_models::pricing::zero_coupon_value;
//! use bond_risk::pnl::{MarketState, PnlScenario};
//!
//! let scenario = PnlScenario::new(
//!     MarketState::new(0.04, 1.0),
//!     MarketState::new(0.05, 1.0 - 1.0 / 252.0),
//!     10.0, // units held yesterday
//!     12.0, // units held today
//!     0.0,  // no coupon cash received
//! ).unwrap();
//!
//! let attribution = scenario
//!     .decompose(|rate, ttm| zero_coupon_value(100.0, rate, ttm, Compounding::Continuous))
//!     .unwrap();
//! let total = attribution.theta + attribution.hypothetical + attribution.position;
//! assert!((total - attribution.comprehensive).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod pnl;
