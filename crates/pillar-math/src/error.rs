//! Numerical error types.

use thiserror::Error;

/// Result of a solver or interpolation call.
pub type MathResult<T> = Result<T, MathError>;

/// Failures of the root finder and the interpolators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The iteration cap was hit before either tolerance was met.
    #[error("no root after {iterations} iterations, |f| = {residual:.2e}")]
    ConvergenceFailed {
        /// Iterations performed.
        iterations: u32,
        /// `|f|` at the best iterate.
        residual: f64,
    },

    /// `f(a)` and `f(b)` are both nonzero with the same sign.
    #[error("[{a}, {b}] does not bracket a root: f(a) = {fa:.2e}, f(b) = {fb:.2e}")]
    InvalidBracket {
        /// Left end.
        a: f64,
        /// Right end.
        b: f64,
        /// `f(a)`.
        fa: f64,
        /// `f(b)`.
        fb: f64,
    },

    /// A strict interpolator was queried beyond its knots.
    #[error("{x} lies beyond the knots [{min}, {max}]")]
    ExtrapolationNotAllowed {
        /// Query abscissa.
        x: f64,
        /// First knot.
        min: f64,
        /// Last knot.
        max: f64,
    },

    /// Too few knots.
    #[error("{actual} knot(s) given, at least {required} needed")]
    InsufficientData {
        /// Knots needed.
        required: usize,
        /// Knots given.
        actual: usize,
    },

    /// An argument is NaN, unordered or otherwise unusable.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Shorthand for [`MathError::ConvergenceFailed`].
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Shorthand for [`MathError::InvalidInput`].
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`MathError::InsufficientData`].
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
