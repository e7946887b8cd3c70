//! Curve abstractions for discounting and credit risk.
//!
//! This module provides:
//! - [`DiscountCurve`]: Generic trait for risk-free discounting
//! - [`FlatCurve`]: Constant-rate discount curve
//! - [`CreditCurve`]: Generic trait for hazard rate and survival probability
//! - [`FlatHazardCurve`]: Constant hazard rate curve
//! - [`StepHazardCurve`]: Piecewise-constant hazard rate curve

mod credit;
mod flat;
mod traits;

pub use credit::{CreditCurve, FlatHazardCurve, StepHazardCurve};
pub use flat::FlatCurve;
pub use traits::DiscountCurve;
