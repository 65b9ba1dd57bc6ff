//! Period schedule generation.
//!
//! Schedules are unadjusted: every date is `start + k * tenor` months (with
//! end-of-month clamping) and the final date is the end date itself, so a
//! maturity that is not a whole number of tenors produces a short last
//! period.

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Generates the period boundary dates from `start` to `end`.
///
/// Returns `start, start + tenor, start + 2 * tenor, ...` for every date
/// strictly before `end`, followed by `end`. Consecutive pairs are accrual
/// periods.
///
/// # Errors
///
/// Returns `CoreError::InvalidSchedule` if `tenor_months` is zero or
/// `end <= start`.
///
/// # Example
///
/// ```rust
/// use pillar_core::schedule::generate_schedule;
/// use pillar_core::types::Date;
///
/// let start = Date::from_ymd(2010, 1, 1).unwrap();
/// let end = Date::from_ymd(2011, 4, 1).unwrap();
/// let dates = generate_schedule(start, end, 6).unwrap();
/// assert_eq!(dates.len(), 4); // Jan-10, Jul-10, Jan-11, Apr-11
/// ```
pub fn generate_schedule(start: Date, end: Date, tenor_months: u32) -> CoreResult<Vec<Date>> {
    if tenor_months == 0 {
        return Err(CoreError::invalid_schedule("tenor must be at least one month"));
    }
    if end <= start {
        return Err(CoreError::invalid_schedule(format!(
            "end date {end} must be after start date {start}"
        )));
    }

    let tenor = i32::try_from(tenor_months)
        .map_err(|_| CoreError::invalid_schedule(format!("tenor {tenor_months} too large")))?;

    let mut dates = vec![start];
    let mut step: i32 = 1;
    loop {
        let months = step
            .checked_mul(tenor)
            .ok_or_else(|| CoreError::invalid_schedule(format!("tenor {tenor_months} too large")))?;
        let next = start.add_months(months)?;
        if next >= end {
            break;
        }
        dates.push(next);
        step += 1;
    }
    dates.push(end);

    Ok(dates)
}

/// Returns the first CDS roll date (20 March, June, September or December)
/// on or after `date`.
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` only if the result is out of range.
pub fn next_cds_roll_date(date: Date) -> CoreResult<Date> {
    for month in [3, 6, 9, 12] {
        let candidate = Date::from_ymd(date.year(), month, 20)?;
        if date <= candidate {
            return Ok(candidate);
        }
    }
    Date::from_ymd(date.year() + 1, 3, 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_single_period_when_tenor_exceeds_maturity() {
        let dates = generate_schedule(d(2010, 1, 1), d(2010, 2, 1), 12).unwrap();
        assert_eq!(dates, vec![d(2010, 1, 1), d(2010, 2, 1)]);
    }

    #[test]
    fn test_regular_schedule_includes_both_ends() {
        let dates = generate_schedule(d(2010, 1, 1), d(2012, 1, 1), 6).unwrap();
        assert_eq!(
            dates,
            vec![
                d(2010, 1, 1),
                d(2010, 7, 1),
                d(2011, 1, 1),
                d(2011, 7, 1),
                d(2012, 1, 1)
            ]
        );
    }

    #[test]
    fn test_short_last_period() {
        let dates = generate_schedule(d(2010, 1, 1), d(2010, 12, 20), 3).unwrap();
        assert_eq!(dates.last(), Some(&d(2010, 12, 20)));
        assert_eq!(dates[dates.len() - 2], d(2010, 10, 1));
    }

    #[test]
    fn test_month_end_start_does_not_drift() {
        let dates = generate_schedule(d(2010, 1, 31), d(2010, 7, 31), 1).unwrap();
        assert_eq!(dates[1], d(2010, 2, 28));
        assert_eq!(dates[2], d(2010, 3, 31));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(generate_schedule(d(2010, 1, 1), d(2011, 1, 1), 0).is_err());
        assert!(generate_schedule(d(2010, 1, 1), d(2010, 1, 1), 3).is_err());
        assert!(generate_schedule(d(2011, 1, 1), d(2010, 1, 1), 3).is_err());
    }

    #[test]
    fn test_next_cds_roll_date() {
        assert_eq!(next_cds_roll_date(d(2011, 1, 1)).unwrap(), d(2011, 3, 20));
        assert_eq!(next_cds_roll_date(d(2011, 3, 20)).unwrap(), d(2011, 3, 20));
        assert_eq!(next_cds_roll_date(d(2011, 3, 21)).unwrap(), d(2011, 6, 20));
        assert_eq!(next_cds_roll_date(d(2011, 12, 21)).unwrap(), d(2012, 3, 20));
    }
}
