//! Bootstrap configuration.

use pillar_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Default lower end of the pillar value bracket.
pub const DEFAULT_LOWER_BOUND: f64 = 1e-4;

/// Default upper end of the pillar value bracket.
pub const DEFAULT_UPPER_BOUND: f64 = 2.0;

/// Configuration for a bootstrap run.
///
/// The bracket `[lower_bound, upper_bound]` is searched for every pillar.
/// It must contain 1.0 and every plausible discount factor or survival
/// probability; the default `[1e-4, 2.0]` does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Lower end of the pillar value bracket.
    pub lower_bound: f64,
    /// Upper end of the pillar value bracket.
    pub upper_bound: f64,
    /// Absolute tolerance on the objective and the bracket width.
    pub tolerance: f64,
    /// Tolerance on the bracket width relative to the pillar value.
    pub relative_tolerance: f64,
    /// Maximum solver iterations per pillar.
    pub max_iterations: u32,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        let solver = SolverConfig::default();
        Self {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            tolerance: solver.tolerance,
            relative_tolerance: solver.relative_tolerance,
            max_iterations: solver.max_iterations,
        }
    }
}

impl BootstrapConfig {
    /// Sets the solver bracket.
    #[must_use]
    pub fn with_bracket(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Sets the absolute tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the relative tolerance.
    #[must_use]
    pub fn with_relative_tolerance(mut self, relative_tolerance: f64) -> Self {
        self.relative_tolerance = relative_tolerance;
        self
    }

    /// Sets the maximum solver iterations per pillar.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Solver settings for one pillar solve.
    #[must_use]
    pub fn solver(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
            .with_relative_tolerance(self.relative_tolerance)
    }

    /// Checks that the configuration can drive a bootstrap.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidConfig` if the bracket is not a finite,
    /// positive, non-empty interval, a tolerance is negative or both are
    /// zero, or the iteration budget is zero.
    pub fn validate(&self) -> CurveResult<()> {
        if !(self.lower_bound.is_finite() && self.upper_bound.is_finite()) {
            return Err(CurveError::invalid_config("bracket bounds must be finite"));
        }
        if self.lower_bound <= 0.0 {
            return Err(CurveError::invalid_config(format!(
                "lower bound {} must be positive",
                self.lower_bound
            )));
        }
        if self.lower_bound >= self.upper_bound {
            return Err(CurveError::invalid_config(format!(
                "lower bound {} must be below upper bound {}",
                self.lower_bound, self.upper_bound
            )));
        }
        if self.tolerance < 0.0 || self.relative_tolerance < 0.0 {
            return Err(CurveError::invalid_config("tolerances must be non-negative"));
        }
        if self.tolerance == 0.0 && self.relative_tolerance == 0.0 {
            return Err(CurveError::invalid_config(
                "at least one of tolerance and relative tolerance must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(CurveError::invalid_config("max iterations must be positive"));
        }
        Ok(())
    }
}
