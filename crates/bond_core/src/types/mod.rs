//! Shared value types and error definitions.

mod compounding;
mod error;

pub use compounding::Compounding;
pub use error::PricingError;
