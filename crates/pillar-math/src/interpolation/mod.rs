//! Interpolation methods for curve construction.
//!
//! - [`LinearInterpolator`]: linear in the values (forward rate curves)
//! - [`LogLinearInterpolator`]: linear in `ln(value)` (discount factors and
//!   survival probabilities)
//!
//! Both accept a single point, return the stored value exactly at every
//! knot, and can clamp queries outside the knot range to the boundary
//! value. Clamping a log-linear interpolator is flat extrapolation in log
//! space.

mod linear;
mod log_linear;

pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    ///
    /// Outside `[min_x, max_x]` this fails unless extrapolation is allowed.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Position of a query point relative to the knots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Location {
    /// At or before the first knot.
    Before,
    /// Exactly on knot `i`.
    Knot(usize),
    /// Strictly inside `(xs[i], xs[i + 1])`, with the weight of `xs[i + 1]`.
    Inside(usize, f64),
    /// At or after the last knot.
    After,
}

pub(crate) fn locate(xs: &[f64], x: f64) -> Location {
    let last = xs.len() - 1;
    if x < xs[0] {
        return Location::Before;
    }
    if x > xs[last] {
        return Location::After;
    }
    // Number of knots <= x; at least one because x >= xs[0].
    let i = xs.partition_point(|&knot| knot <= x) - 1;
    if xs[i] == x {
        Location::Knot(i)
    } else {
        let t = (x - xs[i]) / (xs[i + 1] - xs[i]);
        Location::Inside(i, t)
    }
}

pub(crate) fn validate_knots(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    if xs.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("knots must be finite"));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input("x values must be strictly increasing"));
    }
    Ok(())
}

pub(crate) fn out_of_range(xs: &[f64], x: f64) -> MathError {
    MathError::ExtrapolationNotAllowed {
        x,
        min: xs[0],
        max: xs[xs.len() - 1],
    }
}
