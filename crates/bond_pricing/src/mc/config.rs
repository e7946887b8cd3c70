//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum total number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the path count, time grid
/// resolution and seed. Use [`SimulationConfig::builder`] to construct
/// instances.
///
/// # Examples
///
/// ```
/// use bond_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .steps_per_year(12)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.steps_per_year(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    n_paths: usize,
    steps_per_year: usize,
    seed: u64,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Time grid resolution in steps per year.
    #[inline]
    pub fn steps_per_year(&self) -> usize {
        self.steps_per_year
    }

    /// Base seed for the per-path substreams.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Total number of time steps for a horizon of `maturity` years,
    /// rounded to the nearest whole step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStepCount`] when the horizon
    /// produces zero steps or exceeds [`MAX_STEPS`].
    pub fn n_steps(&self, maturity: f64) -> Result<usize, ConfigError> {
        let steps = (maturity * self.steps_per_year as f64).round() as usize;
        if steps == 0 || steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(steps));
        }
        Ok(steps)
    }
}

/// Builder for [`SimulationConfig`].
///
/// `n_paths` must be set; `steps_per_year` defaults to 12 (monthly)
/// and `seed` to 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    steps_per_year: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths, in `[1, MAX_PATHS]`.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the time grid resolution in steps per year.
    #[inline]
    pub fn steps_per_year(mut self, steps_per_year: usize) -> Self {
        self.steps_per_year = Some(steps_per_year);
        self
    }

    /// Sets the base seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `n_paths` is missing or out of
    /// range, or `steps_per_year` is zero.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(n_paths));
        }

        let steps_per_year = self.steps_per_year.unwrap_or(12);
        if steps_per_year == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "steps_per_year",
                value: "must be at least 1".to_string(),
            });
        }

        Ok(SimulationConfig {
            n_paths,
            steps_per_year,
            seed: self.seed.unwrap_or(0),
        })
    }
}
