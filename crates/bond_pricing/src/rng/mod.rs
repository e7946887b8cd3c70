//! Random number generation for Monte Carlo simulation.

mod prng;

pub use prng::SimRng;
