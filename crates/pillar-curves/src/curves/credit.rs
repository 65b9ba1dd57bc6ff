//! Credit (survival) curve.

use pillar_core::Date;

use super::{Curve, PillarCurve};
use crate::error::CurveResult;

/// Length of the finite-difference step used for hazard rates, in years.
const ONE_DAY: f64 = 1.0 / 365.0;

/// Survival (non-default) probabilities as a function of date.
///
/// The hazard rate is never stored: it is derived on demand from the
/// survival curve with a one-day forward difference.
///
/// # Example
///
/// ```rust
/// use pillar_core::Date;
/// use pillar_curves::CreditCurve;
///
/// let today = Date::from_ymd(2014, 1, 1).unwrap();
/// let curve = CreditCurve::new(
///     today,
///     vec![Date::from_ymd(2015, 1, 1).unwrap(), Date::from_ymd(2019, 1, 1).unwrap()],
///     vec![0.8, 0.4],
/// )
/// .unwrap();
///
/// let h = curve.hazard_rate(Date::from_ymd(2014, 7, 1).unwrap());
/// assert!((h - 0.2231).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct CreditCurve {
    inner: PillarCurve,
}

impl CreditCurve {
    /// Builds a credit curve from pillar dates and survival probabilities.
    ///
    /// # Errors
    ///
    /// See [`PillarCurve::new`].
    pub fn new(
        observation_date: Date,
        pillar_dates: Vec<Date>,
        survival_probabilities: Vec<f64>,
    ) -> CurveResult<Self> {
        PillarCurve::new(observation_date, pillar_dates, survival_probabilities)
            .map(|inner| Self { inner })
    }

    /// Probability of no default up to `date`.
    #[must_use]
    pub fn survival_probability(&self, date: Date) -> f64 {
        self.inner.value_at(date)
    }

    /// Probability of default up to `date`.
    #[must_use]
    pub fn default_probability(&self, date: Date) -> f64 {
        1.0 - self.survival_probability(date)
    }

    /// Unconditional probability of default in `(start, end]`.
    #[must_use]
    pub fn marginal_default_probability(&self, start: Date, end: Date) -> f64 {
        (self.survival_probability(start) - self.survival_probability(end)).max(0.0)
    }

    /// Annualized hazard rate at `date`.
    ///
    /// `h(d) = -(1 / S(d)) * (S(d + 1 day) - S(d)) / (1 / 365)`
    ///
    /// Zero wherever the survival curve is flat over the following day,
    /// including everywhere after the last pillar.
    #[must_use]
    pub fn hazard_rate(&self, date: Date) -> f64 {
        let today = self.survival_probability(date);
        let tomorrow = self.survival_probability(date.add_days(1));
        -(tomorrow - today) / (today * ONE_DAY)
    }
}

impl Curve for CreditCurve {
    fn from_pillars(
        observation_date: Date,
        pillar_dates: Vec<Date>,
        pillar_values: Vec<f64>,
    ) -> CurveResult<Self> {
        Self::new(observation_date, pillar_dates, pillar_values)
    }

    fn pillar_curve(&self) -> &PillarCurve {
        &self.inner
    }
}
