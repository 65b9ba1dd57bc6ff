//! Log-linear pillar curve.

use std::fmt;

use pillar_core::Date;
use pillar_math::interpolation::LogLinearInterpolator;

use crate::error::{CurveError, CurveResult};

/// Ordered (date, value) pillars with log-linear interpolation on day
/// ordinals.
///
/// The first pillar is always the observation date with value exactly 1.0.
/// Between pillars `ln(value)` is linear in the day ordinal. Outside the
/// pillar range the boundary value is held, which is flat extrapolation in
/// log space: a date after the last pillar gets the last pillar value and a
/// date before the observation date gets 1.0.
#[derive(Clone)]
pub struct PillarCurve {
    observation_date: Date,
    pillar_dates: Vec<Date>,
    interpolator: LogLinearInterpolator,
}

impl PillarCurve {
    /// Builds a curve from its observation date and pillars.
    ///
    /// If the first pillar is after the observation date, the anchor
    /// `(observation_date, 1.0)` is prepended.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveInput` if:
    /// - no pillars are given, or dates and values differ in length
    /// - the first pillar precedes the observation date
    /// - pillar dates are not strictly increasing
    /// - a value is not finite and positive
    /// - a pillar on the observation date has a value other than 1.0
    pub fn new(
        observation_date: Date,
        mut pillar_dates: Vec<Date>,
        mut pillar_values: Vec<f64>,
    ) -> CurveResult<Self> {
        if pillar_dates.is_empty() {
            return Err(CurveError::invalid_input("no pillars given"));
        }
        if pillar_dates.len() != pillar_values.len() {
            return Err(CurveError::invalid_input(format!(
                "{} pillar dates but {} pillar values",
                pillar_dates.len(),
                pillar_values.len()
            )));
        }

        let first = pillar_dates[0];
        if first < observation_date {
            return Err(CurveError::invalid_input(format!(
                "first pillar {first} precedes observation date {observation_date}"
            )));
        }
        if first == observation_date && pillar_values[0] != 1.0 {
            return Err(CurveError::invalid_input(format!(
                "value on observation date {observation_date} must be 1.0, got {}",
                pillar_values[0]
            )));
        }
        if first > observation_date {
            pillar_dates.insert(0, observation_date);
            pillar_values.insert(0, 1.0);
        }

        if let Some(pair) = pillar_dates.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(CurveError::invalid_input(format!(
                "pillar dates must be strictly increasing: {} followed by {}",
                pair[0], pair[1]
            )));
        }
        if let Some((date, value)) = pillar_dates
            .iter()
            .zip(&pillar_values)
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(CurveError::invalid_input(format!(
                "pillar value at {date} must be positive and finite, got {value}"
            )));
        }

        let ordinals = pillar_dates.iter().map(|d| d.ordinal() as f64).collect();
        let interpolator = LogLinearInterpolator::new(ordinals, pillar_values)
            .map_err(|e| CurveError::invalid_input(e.to_string()))?;

        Ok(Self {
            observation_date,
            pillar_dates,
            interpolator,
        })
    }

    /// Interpolated value at `date`.
    #[must_use]
    pub fn value_at(&self, date: Date) -> f64 {
        self.interpolator.interpolate_clamped(date.ordinal() as f64)
    }

    /// The date on which the curve is anchored at 1.0.
    #[must_use]
    pub fn observation_date(&self) -> Date {
        self.observation_date
    }

    /// Pillar dates, starting with the observation date.
    #[must_use]
    pub fn pillar_dates(&self) -> &[Date] {
        &self.pillar_dates
    }

    /// Pillar values, starting with 1.0.
    #[must_use]
    pub fn pillar_values(&self) -> &[f64] {
        self.interpolator.y_values()
    }

    /// Iterates over `(date, value)` pillars.
    pub fn pillars(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.pillar_dates
            .iter()
            .copied()
            .zip(self.pillar_values().iter().copied())
    }

    /// Number of pillars, including the observation anchor.
    #[must_use]
    pub fn pillar_count(&self) -> usize {
        self.pillar_dates.len()
    }

    /// Last pillar date.
    #[must_use]
    pub fn last_pillar_date(&self) -> Date {
        self.pillar_dates[self.pillar_dates.len() - 1]
    }
}

impl fmt::Debug for PillarCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PillarCurve")
            .field("observation_date", &self.observation_date)
            .field("pillars", &self.pillar_count())
            .field("last_pillar", &self.last_pillar_date())
            .finish()
    }
}
