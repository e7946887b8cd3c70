//! Monte Carlo simulation kernel.

mod callable;
mod config;
mod error;
mod paths;

pub use callable::{CallablePriceResult, ExercisePolicy, OasCallablePricer};
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use paths::{generate_short_rate_paths, RatePathSet, ShortRateParams};
