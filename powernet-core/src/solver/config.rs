#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::models::DEFAULT_LAMBDA;
use crate::utils::{Float, GenericResult};

/// Specifies GRASP parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GraspConfig {
    /// Overload penalty weight.
    pub lambda: i64,
    /// Amount of construction + local search restarts.
    pub restarts: usize,
    /// Randomization of construction: 0 is pure greedy, 1 is uniform choice among all generators.
    pub alpha: Float,
    /// Maximum amount of local search passes over all houses.
    pub max_passes: usize,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self { lambda: DEFAULT_LAMBDA, restarts: 100, alpha: 0.3, max_passes: 50 }
    }
}

impl GraspConfig {
    /// Sets overload penalty weight.
    pub fn with_lambda(mut self, lambda: i64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Sets amount of restarts.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Sets randomization parameter.
    pub fn with_alpha(mut self, alpha: Float) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets maximum amount of local search passes.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Checks that parameters are in their allowed ranges.
    pub fn validate(&self) -> GenericResult<()> {
        if !(0. ..=1.).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1] range, got {}", self.alpha).into());
        }

        if self.restarts == 0 {
            return Err("restarts must be positive".into());
        }

        if self.max_passes == 0 {
            return Err("max passes must be positive".into());
        }

        if self.lambda < 0 {
            return Err(format!("lambda must not be negative, got {}", self.lambda).into());
        }

        Ok(())
    }
}
