//! Root-find adapter for a single pillar.

use pillar_core::Date;

use crate::curves::Curve;
use crate::error::CurveResult;
use crate::instrument::BootstrapInstrument;

/// Maps a trial value of the newest pillar to the instrument's pricing error.
///
/// Every evaluation builds a fresh curve from the solved prefix plus
/// `(pillar_date, trial)`. Nothing is mutated in place, so the solved
/// pillars are never touched and evaluations can run concurrently.
pub struct PillarObjective<'a, C: Curve> {
    observation_date: Date,
    solved_dates: &'a [Date],
    solved_values: &'a [f64],
    pillar_date: Date,
    instrument: &'a dyn BootstrapInstrument<C>,
}

impl<'a, C: Curve> PillarObjective<'a, C> {
    /// Creates the objective for `instrument` on top of the solved prefix.
    ///
    /// `solved_dates` and `solved_values` include the observation-date
    /// anchor and every pillar solved so far.
    #[must_use]
    pub fn new(
        observation_date: Date,
        solved_dates: &'a [Date],
        solved_values: &'a [f64],
        instrument: &'a dyn BootstrapInstrument<C>,
    ) -> Self {
        Self {
            observation_date,
            solved_dates,
            solved_values,
            pillar_date: instrument.end_date(),
            instrument,
        }
    }

    /// The pillar being solved.
    #[must_use]
    pub fn pillar_date(&self) -> Date {
        self.pillar_date
    }

    /// Curve with the newest pillar set to `trial`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveInput` if `trial` is not a positive
    /// finite number.
    pub fn curve_at(&self, trial: f64) -> CurveResult<C> {
        let mut dates = Vec::with_capacity(self.solved_dates.len() + 1);
        dates.extend_from_slice(self.solved_dates);
        dates.push(self.pillar_date);

        let mut values = Vec::with_capacity(self.solved_values.len() + 1);
        values.extend_from_slice(self.solved_values);
        values.push(trial);

        C::from_pillars(self.observation_date, dates, values)
    }

    /// Pricing error `npv - target` with the newest pillar set to `trial`.
    ///
    /// # Errors
    ///
    /// See [`curve_at`](Self::curve_at).
    pub fn evaluate(&self, trial: f64) -> CurveResult<f64> {
        let curve = self.curve_at(trial)?;
        Ok(self.instrument.npv(&curve) - self.instrument.target())
    }
}
