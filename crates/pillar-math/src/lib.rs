//! # Pillar Math
//!
//! Numerical building blocks for curve bootstrapping.
//!
//! [`solvers::brent`] finds the root of a bracketed scalar function under
//! an iteration cap and absolute plus relative tolerances. The
//! [`interpolation`] module holds the linear and log-linear interpolators
//! curves are built on; both clamp flat outside their knots.
//!
//! Everything here works on plain `f64` abscissae. Dates become ordinals
//! one layer up.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Common imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator, LogLinearInterpolator};
    pub use crate::solvers::{brent, brent_with_endpoints, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
