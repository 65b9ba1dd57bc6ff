//! Root-finder settings for the bootstrap.

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Bracket and stopping rules for every pillar solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Lower end of the pillar value bracket.
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,

    /// Upper end of the pillar value bracket.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,

    /// Absolute tolerance on the residual and the bracket width.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Bracket width tolerance relative to the iterate.
    #[serde(default = "default_relative_tolerance")]
    pub relative_tolerance: f64,

    /// Maximum iterations per pillar.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_lower_bound() -> f64 {
    1e-4
}

fn default_upper_bound() -> f64 {
    2.0
}

fn default_tolerance() -> f64 {
    1e-12
}

fn default_relative_tolerance() -> f64 {
    4.0 * f64::EPSILON
}

fn default_max_iterations() -> u32 {
    100
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
            tolerance: default_tolerance(),
            relative_tolerance: default_relative_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.lower_bound.is_finite() && self.lower_bound > 0.0) {
            errors.push(ValidationError::with_rule(
                "lower_bound",
                "Lower bound must be positive and finite",
                "positive_bound",
            ));
        }
        if !self.upper_bound.is_finite() || self.upper_bound <= self.lower_bound {
            errors.push(ValidationError::with_rule(
                "upper_bound",
                "Upper bound must be finite and above the lower bound",
                "ordered_bracket",
            ));
        }
        if !(self.tolerance > 0.0) {
            errors.push(ValidationError::with_rule(
                "tolerance",
                "Tolerance must be positive",
                "positive_tolerance",
            ));
        }
        if !(self.relative_tolerance >= 0.0) {
            errors.push(ValidationError::with_rule(
                "relative_tolerance",
                "Relative tolerance cannot be negative",
                "non_negative_tolerance",
            ));
        }
        if self.max_iterations == 0 || self.max_iterations > 10_000 {
            errors.push(ValidationError::with_rule(
                "max_iterations",
                "Max iterations must be between 1 and 10000",
                "valid_iterations",
            ));
        }

        errors
    }
}
