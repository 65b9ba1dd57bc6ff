//! Discount curve.

use pillar_core::Date;

use super::{Curve, PillarCurve};
use crate::error::CurveResult;

/// Discount factors as a function of payment date.
///
/// # Example
///
/// ```rust
/// use pillar_core::Date;
/// use pillar_curves::DiscountCurve;
///
/// let today = Date::from_ymd(2010, 1, 1).unwrap();
/// let curve = DiscountCurve::new(
///     today,
///     vec![Date::from_ymd(2011, 1, 1).unwrap(), Date::from_ymd(2012, 1, 1).unwrap()],
///     vec![0.95, 0.88],
/// )
/// .unwrap();
///
/// assert_eq!(curve.discount_factor(today), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    inner: PillarCurve,
}

impl DiscountCurve {
    /// Builds a discount curve from pillar dates and discount factors.
    ///
    /// # Errors
    ///
    /// See [`PillarCurve::new`].
    pub fn new(
        observation_date: Date,
        pillar_dates: Vec<Date>,
        discount_factors: Vec<f64>,
    ) -> CurveResult<Self> {
        PillarCurve::new(observation_date, pillar_dates, discount_factors).map(|inner| Self { inner })
    }

    /// Discount factor for a cash flow paid on `date`.
    #[must_use]
    pub fn discount_factor(&self, date: Date) -> f64 {
        self.inner.value_at(date)
    }
}

impl Curve for DiscountCurve {
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
