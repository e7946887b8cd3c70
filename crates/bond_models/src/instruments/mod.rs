//! Bond instrument definitions.

mod bond;
mod call;
mod frequency;

pub use bond::BondTerms;
pub use call::{CallEntry, CallSchedule};
pub use frequency::Frequency;
