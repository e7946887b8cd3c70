//! Market data abstractions: discount curves, credit curves, and
//! rating-cohort default schedules.

pub mod cohort;
pub mod curves;
mod error;

pub use cohort::CohortSchedule;
pub use error::MarketDataError;
