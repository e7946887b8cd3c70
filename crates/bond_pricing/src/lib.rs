//! # bond_pricing: Monte Carlo Simulation Engine
//!
//! ## Layer 3 (Stochastic Pricing) Role
//!
//! Builds on `bond_core` and `bond_models` to provide the stochastic
//! valuation layer:
//! - Seeded, reproducible random number generation (`rng`)
//! - Lognormal short-rate path simulation (`mc::paths`)
//! - OAS-based callable bond pricing over simulated paths
//!   (`mc::callable`)
//!
//! Simulation is `f64`-only; path generation and per-path valuation are
//! parallelised with `rayon` using independent per-path seed
//! substreams, so results are identical regardless of thread count.
//!
//! ## Example
//!
//! ```
//! use bond_models::instruments::{BondTerms, CallSchedule, Frequency};
//! use bond_pricing::mc::{OasCallablePricer, ShortRateParams, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(2_000)
//!     .steps_per_year(12)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let terms = BondTerms::new(100.0, 0.05, 5.0, Frequency::Annual).unwrap();
//! let calls = CallSchedule::single(2.0, 101.0).unwrap();
//! let params = ShortRateParams::new(0.03, 0.15).unwrap();
//!
//! let pricer = OasCallablePricer::new(config);
//! let result = pricer.price(&terms, Some(&calls), &params, 0.01).unwrap();
//! assert!(result.price > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
