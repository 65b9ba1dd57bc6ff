//! Curve types.
//!
//! [`PillarCurve`] holds the pillars and the log-linear interpolation.
//! [`DiscountCurve`] and [`CreditCurve`] wrap it with their domain
//! vocabulary, and both implement [`Curve`] so the bootstrap can build
//! either one. [`ForwardRateCurve`] is a plain linear curve of forward
//! rates read by floating legs.

mod credit;
mod discount;
mod forward;
mod pillar;

pub use credit::CreditCurve;
pub use discount::DiscountCurve;
pub use forward::ForwardRateCurve;
pub use pillar::PillarCurve;

use pillar_core::Date;

use crate::error::CurveResult;

/// A curve assembled from pillar dates and values.
///
/// Implementations are immutable once built and may be shared freely
/// between threads.
pub trait Curve: Sized + Send + Sync {
    /// Builds the curve from its observation date and pillars.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurveInput` when the pillars violate the
    /// rules of [`PillarCurve::new`].
    fn from_pillars(
        observation_date: Date,
        pillar_dates: Vec<Date>,
        pillar_values: Vec<f64>,
    ) -> CurveResult<Self>;

    /// The underlying pillar curve.
    fn pillar_curve(&self) -> &PillarCurve;

    /// Interpolated curve value at `date`.
    fn value_at(&self, date: Date) -> f64 {
        self.pillar_curve().value_at(date)
    }

    /// The date on which the curve is anchored at 1.0.
    fn observation_date(&self) -> Date {
        self.pillar_curve().observation_date()
    }
}
