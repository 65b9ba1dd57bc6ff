//! Linear interpolation.

use crate::error::MathResult;
use crate::interpolation::{locate, out_of_range, validate_knots, Interpolator, Location};

/// Piecewise linear interpolation between data points.
///
/// # Example
///
/// ```rust
/// use pillar_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![0.0, 2.0], vec![0.03, 0.05]).unwrap();
/// assert!((interp.interpolate(1.0).unwrap() - 0.04).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, lengths differ, a value is
    /// not finite, or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys)?;
        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables flat extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Interpolates at x, holding the boundary value outside the knot range.
    #[must_use]
    pub fn interpolate_clamped(&self, x: f64) -> f64 {
        match locate(&self.xs, x) {
            Location::Before => self.ys[0],
            Location::After => self.ys[self.ys.len() - 1],
            Location::Knot(i) => self.ys[i],
            Location::Inside(i, t) => self.ys[i] + t * (self.ys[i + 1] - self.ys[i]),
        }
    }

    /// Returns the knot x values.
    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the knot y values.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.ys
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(out_of_range(&self.xs, x));
        }
        Ok(self.interpolate_clamped(x))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_midpoints() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 3.0], vec![0.0, 1.0, 5.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 0.5);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 3.0);
    }

    #[test]
    fn test_linear_range_check() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0], vec![0.03, 0.04]).unwrap();

        assert!(matches!(
            interp.interpolate(2.0),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));

        let interp = interp.with_extrapolation();
        assert!(interp.allows_extrapolation());
        assert_eq!(interp.interpolate(2.0).unwrap(), 0.04);
        assert_eq!(interp.interpolate(-2.0).unwrap(), 0.03);
    }

    #[test]
    fn test_single_point_is_constant() {
        let interp = LinearInterpolator::new(vec![5.0], vec![0.02]).unwrap();

        assert_eq!(interp.interpolate_clamped(-100.0), 0.02);
        assert_eq!(interp.interpolate_clamped(5.0), 0.02);
        assert_eq!(interp.interpolate_clamped(100.0), 0.02);
    }
}
