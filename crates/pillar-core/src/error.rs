//! Error types for dates and schedules.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by date arithmetic and schedule generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A schedule could not be generated from the given inputs.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of what's invalid.
        reason: String,
    },

    /// Unrecognised day count convention name.
    #[error("Unknown day count convention: '{name}'")]
    UnknownDayCount {
        /// The name that failed to parse.
        name: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_schedule_error_display() {
        let err = CoreError::invalid_schedule("tenor must be positive");
        assert_eq!(err.to_string(), "Invalid schedule: tenor must be positive");
    }
}
