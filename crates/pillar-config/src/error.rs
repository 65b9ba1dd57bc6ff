//! Errors raised while loading a market file.

use std::path::PathBuf;

use thiserror::Error;

/// Result of loading or validating configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Why a market file was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for the schema.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Exactly one field failed validation.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Dotted path of the field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Several fields failed validation.
    #[error("Multiple validation errors: {}", join(.0))]
    MultipleValidationErrors(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

/// One failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the field, e.g. `cds.quotes[1].spread`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
    /// Short name of the broken rule, when it has one.
    pub rule: Option<String>,
}

impl ValidationError {
    /// An error without a rule name.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// An error tagged with the rule it breaks.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }

    /// Prefixes the field with its parent path, e.g. `ois[2].rate`.
    pub fn nested(self, parent: impl std::fmt::Display) -> Self {
        Self {
            field: format!("{parent}.{}", self.field),
            ..self
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Configuration sections that can check themselves.
pub trait Validate {
    /// Every problem found; empty when the section is usable.
    fn validate(&self) -> Vec<ValidationError>;

    /// `true` when [`Validate::validate`] finds nothing.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Folds the problems into a single [`ConfigError`].
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}
