//! Instrument abstraction used by the bootstrap.
//!
//! The driver never sees concrete products. Anything with an end date and a
//! price on a curve of type `C` can be bootstrapped into a `C`.

use std::sync::Arc;

use pillar_core::Date;

use crate::curves::Curve;

/// A market instrument that can calibrate one pillar of a curve `C`.
///
/// # Precondition
///
/// `npv(curve)` must cross `target()` exactly once as the value of the
/// newest pillar (the one at `end_date()`) moves across the solver bracket.
/// Monotonic dependence is the usual way to guarantee this. `npv` must also
/// be finite across the bracket. The bootstrap does not verify either; a
/// violation at the bracket ends shows up as `RootNotBracketed`.
///
/// # Example
///
/// ```rust,ignore
/// use pillar_curves::{BootstrapInstrument, DiscountCurve};
///
/// struct ZeroBond { maturity: Date, price: f64 }
///
/// impl BootstrapInstrument<DiscountCurve> for ZeroBond {
///     fn end_date(&self) -> Date { self.maturity }
///     fn npv(&self, curve: &DiscountCurve) -> f64 {
///         curve.discount_factor(self.maturity) - self.price
///     }
///     fn description(&self) -> String { format!("ZCB {}", self.maturity) }
/// }
/// ```
pub trait BootstrapInstrument<C: Curve>: Send + Sync {
    /// Last date the instrument depends on; becomes the solved pillar.
    fn end_date(&self) -> Date;

    /// Value of the instrument on `curve`.
    fn npv(&self, curve: &C) -> f64;

    /// Value `npv` must reach on the calibrated curve.
    ///
    /// Zero for instruments quoted at par. Spread-matching instruments
    /// return their quoted spread and compute a par spread in `npv`.
    fn target(&self) -> f64 {
        0.0
    }

    /// Human-readable label used in errors and logs.
    fn description(&self) -> String {
        format!("instrument ending {}", self.end_date())
    }
}

impl<C: Curve, T: BootstrapInstrument<C> + ?Sized> BootstrapInstrument<C> for Arc<T> {
    fn end_date(&self) -> Date {
        (**self).end_date()
    }

    fn npv(&self, curve: &C) -> f64 {
        (**self).npv(curve)
    }

    fn target(&self) -> f64 {
        (**self).target()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<C: Curve, T: BootstrapInstrument<C> + ?Sized> BootstrapInstrument<C> for Box<T> {
    fn end_date(&self) -> Date {
        (**self).end_date()
    }

    fn npv(&self, curve: &C) -> f64 {
        (**self).npv(curve)
    }

    fn target(&self) -> f64 {
        (**self).target()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}
