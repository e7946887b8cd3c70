//! Clean PnL decomposition and time-decay measures.

mod decompose;
mod theta;

pub use decompose::{MarketState, PnlAttribution, PnlScenario};
pub use theta::{one_day_theta, TRADING_DAYS_PER_YEAR};
