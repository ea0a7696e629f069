//! 2-opt configuration.

use crate::error::{Error, Result};

/// Configuration for [`TwoOptSolver`](super::TwoOptSolver).
///
/// # Examples
///
/// ```
/// use tsp_heur::two_opt::TwoOptConfig;
///
/// let config = TwoOptConfig::default().with_passes(4).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TwoOptConfig {
    /// Number of independent initializations to improve; the best result
    /// wins.
    pub passes: usize,

    /// Cost deltas above the negated threshold are ignored, which keeps
    /// floating-point noise from causing endless move sequences.
    pub min_cost_improvement: f64,

    /// Seed for the default random-tour initializer. `None` seeds from
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            passes: 1,
            min_cost_improvement: 1e-8,
            seed: None,
        }
    }
}

impl TwoOptConfig {
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
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
