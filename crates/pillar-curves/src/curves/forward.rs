//! Forward rate curve.

use pillar_core::Date;
use pillar_math::interpolation::LinearInterpolator;

use crate::error::{CurveError, CurveResult};

/// Forward rates by fixing date, linearly interpolated on day ordinals and
/// held flat outside the fixing range.
///
/// The rate read at a fixing date is the simple rate for the period that
/// starts on that date.
#[derive(Debug, Clone)]
pub struct ForwardRateCurve {
    observation_date: Date,
    fixing_dates: Vec<Date>,
    interpolator: LinearInterpolator,
}

impl ForwardRateCurve {
    /// Builds a forward rate curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveInput` if no fixings are given,
    /// lengths differ, fixing dates are not strictly increasing, or a rate
    /// is not finite.
    pub fn new(observation_date: Date, fixing_dates: Vec<Date>, rates: Vec<f64>) -> CurveResult<Self> {
        if fixing_dates.is_empty() {
            return Err(CurveError::invalid_input("no fixings given"));
        }
        let ordinals = fixing_dates.iter().map(|d| d.ordinal() as f64).collect();
        let interpolator = LinearInterpolator::new(ordinals, rates)
            .map_err(|e| CurveError::invalid_input(format!("forward rate curve: {e}")))?;

        Ok(Self {
            observation_date,
            fixing_dates,
            interpolator,
        })
    }

    /// A curve returning `rate` for every fixing date.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveInput` if `rate` is not finite.
    pub fn flat(observation_date: Date, rate: f64) -> CurveResult<Self> {
        Self::new(observation_date, vec![observation_date], vec![rate])
    }

    /// Forward rate fixing on `fixing_date`.
    #[must_use]
    pub fn rate_at(&self, fixing_date: Date) -> f64 {
        self.interpolator.interpolate_clamped(fixing_date.ordinal() as f64)
    }

    /// The curve's observation date.
    #[must_use]
    pub fn observation_date(&self) -> Date {
        self.observation_date
    }

    /// Fixing dates of the known forward rates.
    #[must_use]
    pub fn fixing_dates(&self) -> &[Date] {
        &self.fixing_dates
    }
}
