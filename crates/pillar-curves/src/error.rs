//! Error types for curve construction and bootstrapping.

use pillar_core::Date;
use pillar_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
///
/// Every bootstrap failure is raised at the point of detection and names the
/// instrument it concerns. The driver performs no recovery.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Malformed pillar dates or values at curve construction.
    #[error("Invalid curve input: {reason}")]
    InvalidCurveInput {
        /// Description of what's invalid.
        reason: String,
    },

    /// Instrument added out of increasing maturity order.
    #[error(
        "Instrument '{instrument}' ends on {end_date}, not after the previous instrument ending on {last_end_date}"
    )]
    UnorderedInstrument {
        /// Description of the rejected instrument.
        instrument: String,
        /// End date of the rejected instrument.
        end_date: Date,
        /// End date of the last accepted instrument.
        last_end_date: Date,
    },

    /// No sign change of the pricing function over the solver bracket.
    #[error(
        "Root not bracketed for '{instrument}' at {pillar}: f({lower}) = {f_lower:.6e}, f({upper}) = {f_upper:.6e}"
    )]
    RootNotBracketed {
        /// Description of the instrument being solved.
        instrument: String,
        /// Pillar date being solved.
        pillar: Date,
        /// Lower bracket bound.
        lower: f64,
        /// Upper bracket bound.
        upper: f64,
        /// Objective value at the lower bound.
        f_lower: f64,
        /// Objective value at the upper bound.
        f_upper: f64,
    },

    /// Root finder exhausted its iteration budget.
    #[error(
        "Root find did not converge for '{instrument}' at {pillar} after {iterations} iterations (residual: {residual:.2e})"
    )]
    RootFindDidNotConverge {
        /// Description of the instrument being solved.
        instrument: String,
        /// Pillar date being solved.
        pillar: Date,
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Operation called in a bootstrap phase that does not allow it.
    #[error("Cannot {operation} while bootstrap is {state}")]
    InvalidState {
        /// The rejected operation.
        operation: &'static str,
        /// The phase the driver was in.
        state: String,
    },

    /// Bootstrap configuration is unusable.
    #[error("Invalid bootstrap configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration problem.
        reason: String,
    },

    /// Numerical error not covered by a more specific variant.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid curve input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidCurveInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(operation: &'static str, state: impl ToString) -> Self {
        Self::InvalidState {
            operation,
            state: state.to_string(),
        }
    }

    /// Returns true for failures of the root finder.
    #[must_use]
    pub fn is_solver_failure(&self) -> bool {
        matches!(
            self,
            Self::RootNotBracketed { .. } | Self::RootFindDidNotConverge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_display_names_dates() {
        let err = CurveError::UnorderedInstrument {
            instrument: "OIS 1M".into(),
            end_date: Date::from_ymd(2010, 2, 1).unwrap(),
            last_end_date: Date::from_ymd(2011, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2010-02-01"));
        assert!(msg.contains("2011-01-01"));
    }

    #[test]
    fn test_solver_failure_classification() {
        let err = CurveError::RootFindDidNotConverge {
            instrument: "OIS 1Y".into(),
            pillar: Date::from_ymd(2011, 1, 1).unwrap(),
            iterations: 100,
            residual: 1e-3,
        };
        assert!(err.is_solver_failure());
        assert!(!CurveError::invalid_input("empty").is_solver_failure());
    }

    #[test]
    fn test_invalid_state_display() {
        let err = CurveError::invalid_state("run", "Empty");
        assert_eq!(err.to_string(), "Cannot run while bootstrap is Empty");
    }
}
