//! Configuration for the ranking estimators.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Probability of following a link rather than teleporting.
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;

/// Number of pages visited by the sampler.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Largest per-page rank change at which iteration stops.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Safety bound on solver rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Parameters shared by [`sample_pagerank`](super::sample_pagerank) and
/// [`iterate_pagerank`](super::iterate_pagerank).
///
/// # Examples
///
/// ```
/// use rankmax::pagerank::RankConfig;
///
/// let config = RankConfig::default()
///     .with_damping_factor(0.9)
///     .with_samples(2_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    pub damping_factor: f64,
    pub samples: usize,
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Seed for the sampler; `None` draws a fresh one per run
    pub seed: Option<u64>,
}

impl RankConfig {
    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter is inside its meaningful range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        self.validate_sampling()?;
        self.validate_iteration()
    }

    /// Check the parameters the sampler reads: damping factor and samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending field.
    pub fn validate_sampling(&self) -> Result<()> {
        validate_damping_factor(self.damping_factor)?;
        if self.samples == 0 {
            return Err(invalid("samples must be at least 1"));
        }
        Ok(())
    }

    /// Check the parameters the iterative solver reads: damping factor,
    /// tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending field.
    pub fn validate_iteration(&self) -> Result<()> {
        validate_damping_factor(self.damping_factor)?;
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(invalid(&format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            samples: DEFAULT_SAMPLES,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

/// Damping must lie strictly between 0 and 1.
pub(crate) fn validate_damping_factor(damping_factor: f64) -> Result<()> {
    if damping_factor > 0.0 && damping_factor < 1.0 {
        Ok(())
    } else {
        Err(invalid(&format!(
            "damping factor must be in (0, 1), got {damping_factor}"
        )))
    }
}

fn invalid(message: &str) -> Error {
    Error::InvalidConfiguration {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let config = RankConfig::default();
        assert_eq!(config.damping_factor, 0.85);
        assert_eq!(config.samples, 10_000);
        assert_eq!(config.tolerance, 0.001);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_damping_outside_open_interval() {
        for d in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let err = RankConfig::default()
                .with_damping_factor(d)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("damping factor"), "{err}");
        }
    }

    #[test]
    fn rejects_zero_samples_and_iterations() {
        assert!(RankConfig::default().with_samples(0).validate().is_err());
        assert!(
            RankConfig::default()
                .with_max_iterations(0)
                .validate()
                .is_err()
        );
        assert!(RankConfig::default().with_tolerance(0.0).validate().is_err());
    }

    #[test]
    fn sampling_checks_ignore_solver_settings() {
        let config = RankConfig::default()
            .with_tolerance(-1.0)
            .with_max_iterations(0);
        assert!(config.validate_sampling().is_ok());
        assert!(config.validate_iteration().is_err());
        assert!(
            RankConfig::default()
                .with_samples(0)
                .validate_iteration()
                .is_ok()
        );
    }
}
