//! Date type for curve and cash flow calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CoreError, CoreResult};

/// A calendar date with day resolution.
///
/// Newtype over `chrono::NaiveDate`. Curves interpolate on [`Date::ordinal`],
/// so two dates one calendar day apart are always exactly one unit apart.
///
/// # Example
///
/// ```rust
/// use pillar_core::types::Date;
///
/// let date = Date::from_ymd(2010, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2010, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Proleptic Gregorian day number, with 0001-01-01 as day 1.
    #[must_use]
    pub fn ordinal(&self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    /// Inverse of [`Date::ordinal`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the ordinal is out of range.
    pub fn from_ordinal(ordinal: i64) -> CoreResult<Self> {
        i32::try_from(ordinal)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("ordinal {ordinal} out of range")))
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = (self.year() * 12 + self.month() as i32 - 1)
            .checked_add(months)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {months} months")))?;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2010, 6, 15).unwrap();
        assert_eq!(date.year(), 2010);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2010, 2, 30).is_err());
        assert!(Date::from_ymd(2010, 13, 1).is_err());
    }

    #[test]
    fn test_add_months_clamps_end_of_month() {
        let date = Date::from_ymd(2012, 1, 31).unwrap();
        assert_eq!(date.add_months(1).unwrap(), Date::from_ymd(2012, 2, 29).unwrap());
        assert_eq!(date.add_months(3).unwrap(), Date::from_ymd(2012, 4, 30).unwrap());
    }

    #[test]
    fn test_add_months_across_years() {
        let date = Date::from_ymd(2010, 11, 15).unwrap();
        assert_eq!(date.add_months(14).unwrap(), Date::from_ymd(2012, 1, 15).unwrap());
        assert_eq!(date.add_months(-11).unwrap(), Date::from_ymd(2009, 12, 15).unwrap());
    }

    #[test]
    fn test_add_months_out_of_range() {
        let date = Date::from_ymd(2010, 1, 1).unwrap();
        assert!(matches!(date.add_months(i32::MAX), Err(CoreError::InvalidDate { .. })));
        assert!(matches!(date.add_months(i32::MIN), Err(CoreError::InvalidDate { .. })));
        assert!(date.add_months(12 * 300_000).is_err());
    }

    #[test]
    fn test_ordinal_matches_day_number() {
        assert_eq!(Date::from_ymd(1, 1, 1).unwrap().ordinal(), 1);
        // 2010-01-01 is day 733773 counting 0001-01-01 as day 1
        assert_eq!(Date::from_ymd(2010, 1, 1).unwrap().ordinal(), 733_773);

        let d = Date::from_ymd(2014, 7, 1).unwrap();
        assert_eq!(d.add_days(1).ordinal() - d.ordinal(), 1);
        assert_eq!(Date::from_ordinal(d.ordinal()).unwrap(), d);
    }

    #[test]
    fn test_days_between_and_ops() {
        let d1 = Date::from_ymd(2010, 1, 1).unwrap();
        let d2 = Date::from_ymd(2011, 1, 1).unwrap();
        assert_eq!(d1.days_between(&d2), 365);
        assert_eq!(d2 - d1, 365);
        assert_eq!(d1 + 365, d2);
        assert_eq!(d2 - 365, d1);
    }

    #[test]
    fn test_parse_and_display() {
        let date: Date = "2010-06-15".parse().unwrap();
        assert_eq!(date.to_string(), "2010-06-15");
        assert!(Date::parse("15/06/2010").is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2010, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2010-06-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
