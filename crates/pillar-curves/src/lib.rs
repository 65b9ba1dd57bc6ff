//! # Pillar Curves
//!
//! Pillar curves and the sequential bootstrap that builds them.
//!
//! This crate provides:
//!
//! - **Curves**: [`DiscountCurve`] and [`CreditCurve`], both log-linear in
//!   their pillar values and anchored at 1.0 on the observation date, plus a
//!   linearly interpolated [`ForwardRateCurve`]
//! - **Instruments**: the [`BootstrapInstrument`] trait any product
//!   implements to take part in a bootstrap
//! - **Bootstrap**: [`CurveBootstrapper`], which solves one pillar per
//!   instrument with Brent's method, and a repricing report to audit the
//!   result
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pillar_curves::prelude::*;
//!
//! let mut bootstrapper = CurveBootstrapper::<DiscountCurve>::new(today);
//! bootstrapper.add_instrument(ois_1y)?;
//! bootstrapper.add_instrument(ois_2y)?;
//! bootstrapper.run()?;
//!
//! let curve = bootstrapper.result()?;
//! let df = curve.discount_factor(today.add_months(18)?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod bootstrap;
pub mod curves;
pub mod error;
pub mod instrument;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{
        BootstrapConfig, BootstrapPhase, CurveBootstrapper, PillarObjective, RepricingCheck,
        RepricingReport,
    };
    pub use crate::curves::{CreditCurve, Curve, DiscountCurve, ForwardRateCurve, PillarCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instrument::BootstrapInstrument;
}

pub use bootstrap::{BootstrapConfig, CurveBootstrapper};
pub use curves::{CreditCurve, Curve, DiscountCurve, ForwardRateCurve, PillarCurve};
pub use error::{CurveError, CurveResult};
pub use instrument::BootstrapInstrument;
