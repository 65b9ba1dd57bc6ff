//! Day count conventions.
//!
//! Day count conventions turn a pair of dates into a year fraction. The
//! conventions here cover what the Pillar products need:
//!
//! - [`Act360`]: Actual/360, money market and floating legs
//! - [`Act365Fixed`]: Actual/365 Fixed, option expiries
//! - [`Thirty360E`]: 30E/360, fixed swap legs
//!
//! # Usage
//!
//! ```rust
//! use pillar_core::daycounts::{DayCount, Thirty360E};
//! use pillar_core::types::Date;
//!
//! let start = Date::from_ymd(2010, 1, 31).unwrap();
//! let end = Date::from_ymd(2010, 7, 31).unwrap();
//! assert_eq!(Thirty360E.day_count(start, end), 180);
//! assert!((Thirty360E.year_fraction(start, end) - 0.5).abs() < 1e-15);
//! ```

mod act360;
mod act365;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use thirty360::Thirty360E;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so products holding
/// them can be shared across pricing threads.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Runtime selection of a day count convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
    /// 30E/360 (Eurobond basis)
    Thirty360E,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::Thirty360E => Box::new(Thirty360E),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Thirty360E => "30E/360",
        }
    }

    /// Year fraction under this convention without boxing.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
            DayCountConvention::Thirty360E => Thirty360E.year_fraction(start, end),
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses market names ("ACT/360") and enum-style names ("Act360").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365FIXED" | "ACT365" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            "30E/360" | "EUROBOND" | "THIRTY360E" | "30E360" => Ok(DayCountConvention::Thirty360E),
            _ => Err(CoreError::UnknownDayCount {
                name: s.to_string(),
            }),
        }
    }
}
