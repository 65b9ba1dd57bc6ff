//! Actual/360 day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// Actual calendar days over a 360-day year. Used for overnight-index swap
/// fixed legs, floating legs, CDS premium accruals and bond coupons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act360_basic() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 4, 1).unwrap();

        // Jan 31 + Feb 28 + Mar 31
        assert_eq!(Act360.day_count(start, end), 90);
        assert_relative_eq!(Act360.year_fraction(start, end), 0.25);
    }

    #[test]
    fn test_act360_full_year() {
        let start = Date::from_ymd(2010, 1, 1).unwrap();
        let end = Date::from_ymd(2011, 1, 1).unwrap();

        assert_eq!(Act360.day_count(start, end), 365);
        assert_relative_eq!(Act360.year_fraction(start, end), 365.0 / 360.0);
    }

    #[test]
    fn test_act360_negative() {
        let start = Date::from_ymd(2025, 6, 15).unwrap();
        let end = Date::from_ymd(2025, 6, 1).unwrap();

        assert_eq!(Act360.day_count(start, end), -14);
        assert_relative_eq!(Act360.year_fraction(start, end), -14.0 / 360.0);
    }
}
