//! Root-finding algorithms.
//!
//! Bootstrapping needs exactly one solver: a bracketing method that never
//! leaves `[lo, hi]` and reports a missing sign change instead of guessing.
//! [`brent`] is that solver.
//!
//! # Example
//!
//! ```rust
//! use pillar_math::solvers::{brent, SolverConfig};
//!
//! // Discount factor that makes a one-year deposit at 2% worth par
//! let f = |df: f64| df * (1.0 + 0.02) - 1.0;
//!
//! let result = brent(f, 1e-4, 2.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 1.0 / 1.02).abs() < 1e-12);
//! ```

mod brent;

pub use brent::{brent, brent_with_endpoints};

/// Default absolute tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default relative tolerance on the root (four machine epsilons).
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
///
/// A solve stops when either `|f(x)| < tolerance` or the bracket has shrunk
/// below `tolerance + relative_tolerance * |x|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance, applied to both the residual and the bracket width.
    pub tolerance: f64,
    /// Tolerance on the bracket width relative to the current iterate.
    pub relative_tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
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

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Convergence threshold on the bracket half-width at iterate `x`.
    #[must_use]
    pub fn x_tolerance(&self, x: f64) -> f64 {
        0.5 * (self.tolerance + self.relative_tolerance * x.abs())
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
