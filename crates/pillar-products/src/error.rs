//! Error types for product construction and pricing.

use pillar_core::{CoreError, Date};
use pillar_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;

/// Errors that can occur building or pricing a product.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    /// Both legs of a swap received, or both paid.
    #[error("Leg nominals must have opposite signs: floating {floating}, fixed {fixed}")]
    SameSignNominals {
        /// Floating leg nominal.
        floating: f64,
        /// Fixed leg nominal.
        fixed: f64,
    },

    /// Invalid product specification.
    #[error("Invalid product: {reason}")]
    InvalidProduct {
        /// Description of what's invalid.
        reason: String,
    },

    /// No accrual period ends after the given date.
    #[error("No periods remain after {date}")]
    NoRemainingPeriods {
        /// The cut-off date.
        date: Date,
    },

    /// Pricing formula undefined for the inputs.
    #[error("Pricing failed: {reason}")]
    PricingFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Date or schedule error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Curve construction or bootstrap error.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

impl ProductError {
    /// Creates an invalid product error.
    #[must_use]
    pub fn invalid_product(reason: impl Into<String>) -> Self {
        Self::InvalidProduct {
            reason: reason.into(),
        }
    }

    /// Creates a pricing failure.
    #[must_use]
    pub fn pricing_failed(reason: impl Into<String>) -> Self {
        Self::PricingFailed {
            reason: reason.into(),
        }
    }
}

/// Checks that the two leg nominals point in opposite directions.
pub(crate) fn check_opposite_nominals(floating: f64, fixed: f64) -> ProductResult<()> {
    if floating * fixed > 0.0 {
        return Err(ProductError::SameSignNominals { floating, fixed });
    }
    Ok(())
}
