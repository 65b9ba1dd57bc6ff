//! Log-linear interpolation.
//!
//! Interpolates the logarithm of values, the standard choice for discount
//! factors and survival probabilities: results stay positive and the
//! implied instantaneous rate is constant between knots.

use crate::error::{MathError, MathResult};
use crate::interpolation::{locate, out_of_range, validate_knots, Interpolator, Location};

/// Log-linear interpolation between data points.
///
/// ```text
/// y(x) = exp(linear_interpolate(x, ln(y)))
/// ```
///
/// Knot values are returned exactly as given, without a round trip through
/// `ln`/`exp`.
///
/// # Example
///
/// ```rust
/// use pillar_math::interpolation::{Interpolator, LogLinearInterpolator};
///
/// let times = vec![0.0, 1.0, 2.0];
/// let discount_factors = vec![1.0, 0.97, 0.94];
///
/// let interp = LogLinearInterpolator::new(times, discount_factors).unwrap();
/// let df = interp.interpolate(0.5).unwrap();
/// assert!((df - 0.97_f64.sqrt()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Precomputed ln(y) values
    log_ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates (all positive)
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, lengths differ, a value is
    /// not finite, the x values are not strictly increasing, or any y value
    /// is non-positive.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys)?;

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if y <= 0.0 {
                return Err(MathError::invalid_input(format!(
                    "y[{i}] = {y} is not positive; log-linear requires positive values"
                )));
            }
            log_ys.push(y.ln());
        }

        Ok(Self {
            xs,
            ys,
            log_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables flat (log-space) extrapolation beyond the data range.
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
            Location::Inside(i, t) => {
                let log_y = self.log_ys[i] + t * (self.log_ys[i + 1] - self.log_ys[i]);
                log_y.exp()
            }
        }
    }

    /// Returns the knot x values.
    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the original y values.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.ys
    }
}

impl Interpolator for LogLinearInterpolator {
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
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_log_linear_midpoint_is_geometric_mean() {
        let interp = LogLinearInterpolator::new(vec![0.0, 2.0], vec![0.9, 0.4]).unwrap();

        assert_relative_eq!(interp.interpolate(1.0).unwrap(), (0.9_f64 * 0.4).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_constant_forward_between_knots() {
        let interp = LogLinearInterpolator::new(vec![0.0, 10.0], vec![1.0, 0.5]).unwrap();

        // ln(y) is linear, so equal steps give equal ratios
        let r1 = interp.interpolate(3.0).unwrap() / interp.interpolate(2.0).unwrap();
        let r2 = interp.interpolate(8.0).unwrap() / interp.interpolate(7.0).unwrap();
        assert_relative_eq!(r1, r2, epsilon = 1e-14);
    }

    #[test]
    fn test_clamped_extrapolation_is_flat() {
        let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.95]).unwrap();

        assert_eq!(interp.interpolate_clamped(5.0), 0.95);
        assert_eq!(interp.interpolate_clamped(-5.0), 1.0);
        assert!(interp.interpolate(5.0).is_err());
        assert_eq!(interp.with_extrapolation().interpolate(5.0).unwrap(), 0.95);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.0]).is_err());
        assert!(LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, -0.5]).is_err());
    }

    proptest! {
        #[test]
        fn prop_stays_between_neighbouring_knots(
            y0 in 0.01f64..2.0,
            y1 in 0.01f64..2.0,
            t in 0.0f64..1.0,
        ) {
            let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![y0, y1]).unwrap();
            let y = interp.interpolate(t).unwrap();
            let (lo, hi) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
            prop_assert!(y >= lo * (1.0 - 1e-12) && y <= hi * (1.0 + 1e-12));
        }
    }
}
