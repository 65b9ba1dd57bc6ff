//! 30E/360 day count convention.

use super::DayCount;
use crate::types::Date;

/// 30E/360 (Eurobond basis) day count convention.
///
/// Every month counts as 30 days: a day-of-month of 31 becomes 30 on either
/// end. No February adjustment. Used for fixed swap legs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = i64::from(start.year());
        let y2 = i64::from(end.year());
        let m1 = i64::from(start.month());
        let m2 = i64::from(end.month());
        let d1 = i64::from(start.day().min(30));
        let d2 = i64::from(end.day().min(30));

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}
