//! k-opt configuration.

use crate::error::{Error, Result};

/// Configuration for [`KOptSolver`](super::KOptSolver) and
/// [`IncrementalKOpt`](super::IncrementalKOpt).
///
/// # Examples
///
/// ```
/// use tsp_heur::kopt::KOptConfig;
///
/// let config = KOptConfig::new(3).with_passes(4).with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(KOptConfig::new(1).validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct KOptConfig {
    /// Number of tour edges cut (and segments recombined) per candidate
    /// move. Must be at least two.
    pub k: usize,

    /// Number of independent initializations to improve; the best result
    /// wins.
    pub passes: usize,

    /// Cost deltas above the negated threshold are ignored, which keeps
    /// floating-point noise from causing endless move sequences.
    pub min_cost_improvement: f64,

    /// Seed for the default random-tour initializer. `None` seeds from
    /// entropy.
    pub seed: Option<u64>,

    /// Whether to improve independent passes on the rayon pool. Initial
    /// tours are still drawn sequentially, so seeded runs stay
    /// reproducible.
    pub parallel: bool,
}

impl KOptConfig {
    /// Creates a configuration for the given `k` with defaults for
    /// everything else.
    pub fn new(k: usize) -> Self {
        KOptConfig {
            k,
            passes: 1,
            min_cost_improvement: 1e-8,
            seed: None,
            parallel: false,
        }
    }

    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_min_cost_improvement(mut self, threshold: f64) -> Self {
        self.min_cost_improvement = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.k < 2 {
            return Err(Error::InvalidParameter(format!(
                "k must be at least two, got {}",
                self.k
            )));
        }
        if self.passes < 1 {
            return Err(Error::InvalidParameter("passes must be at least one".into()));
        }
        if !self.min_cost_improvement.is_finite() || self.min_cost_improvement < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "min_cost_improvement must be finite and non-negative, got {}",
                self.min_cost_improvement
            )));
        }
        Ok(())
    }
}
