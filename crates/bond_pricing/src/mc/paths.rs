//! Lognormal short-rate path generation.
//!
//! Simulates the driftless lognormal short-rate model
//!
//! ```text
//! r(t+dt) = r(t) · exp(−½σ²dt + σ√dt · Z)
//! ```
//!
//! which keeps rates strictly positive and martingale in levels.
//!
//! # Memory layout
//!
//! Paths are stored in row-major order:
//! `data[path_idx * (n_steps + 1) + step_idx]`, where `step_idx = 0`
//! holds the initial short rate.

use rayon::prelude::*;

use super::config::SimulationConfig;
use super::error::ConfigError;
use crate::rng::SimRng;

/// Parameters of the lognormal short-rate model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShortRateParams {
    r0: f64,
    volatility: f64,
}

impl ShortRateParams {
    /// Creates validated short-rate parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] when the initial rate
    /// is not strictly positive or the volatility is negative or
    /// non-finite.
    pub fn new(r0: f64, volatility: f64) -> Result<Self, ConfigError> {
        if !r0.is_finite() || r0 <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "r0",
                value: format!("{} is not strictly positive", r0),
            });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "volatility",
                value: format!("{} is negative or non-finite", volatility),
            });
        }
        Ok(Self { r0, volatility })
    }

    /// Initial short rate.
    #[inline]
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Annualised lognormal volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

/// A set of simulated short-rate paths over a uniform time grid.
#[derive(Clone, Debug)]
pub struct RatePathSet {
    data: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
    dt: f64,
}

impl RatePathSet {
    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per path (grid has `n_steps + 1` points).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Grid spacing in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// One path as a slice of `n_steps + 1` rates, starting at `r0`.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let width = self.n_steps + 1;
        let offset = path_idx * width;
        &self.data[offset..offset + width]
    }
}

/// Generates lognormal short-rate paths for the given horizon.
///
/// Each path draws from its own seed substream, so the result is
/// independent of thread scheduling and identical run to run for a
/// fixed configuration.
///
/// # Errors
///
/// Returns [`ConfigError`] when the horizon is non-positive,
/// non-finite, or yields a step count outside the allowed range.
pub fn generate_short_rate_paths(
    config: &SimulationConfig,
    params: &ShortRateParams,
    maturity: f64,
) -> Result<RatePathSet, ConfigError> {
    if !maturity.is_finite() || maturity <= 0.0 {
        return Err(ConfigError::InvalidParameter {
            name: "maturity",
            value: format!("{} is not strictly positive", maturity),
        });
    }
    let n_steps = config.n_steps(maturity)?;
    let n_paths = config.n_paths();
    let dt = maturity / n_steps as f64;

    let sigma = params.volatility();
    let drift_dt = -0.5 * sigma * sigma * dt;
    let vol_sqrt_dt = sigma * dt.sqrt();
    let r0 = params.r0();
    let width = n_steps + 1;
    let base_seed = config.seed();

    let mut data = vec![0.0; n_paths * width];
    data.par_chunks_mut(width)
        .enumerate()
        .for_each(|(path_idx, path)| {
            let mut rng = SimRng::for_path(base_seed, path_idx);
            let mut draws = vec![0.0; n_steps];
            rng.fill_normal(&mut draws);
            path[0] = r0;
            for (step, &z) in draws.iter().enumerate() {
                path[step + 1] = path[step] * (drift_dt + vol_sqrt_dt * z).exp();
            }
        });

    Ok(RatePathSet {
        data,
        n_paths,
        n_steps,
        dt,
    })
}
