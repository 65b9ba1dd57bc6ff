//! CLI error types.

use pillar_config::ConfigError;
use pillar_curves::CurveError;
use pillar_products::ProductError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The market file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A bootstrap failed.
    #[error("Bootstrap failed: {0}")]
    Curve(#[from] CurveError),

    /// A product could not be built or priced.
    #[error("Pricing error: {0}")]
    Product(ProductError),

    /// The solved curve does not reprice its own quotes.
    #[error("{failed} instrument(s) failed to reprice: {instruments}")]
    Repricing {
        /// Number of failing instruments.
        failed: usize,
        /// Comma-separated instrument descriptions.
        instruments: String,
    },
}

impl From<ProductError> for CliError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Curve(inner) => CliError::Curve(inner),
            other => CliError::Product(other),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
