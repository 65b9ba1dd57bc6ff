//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines bisection with secant steps and inverse quadratic
/// interpolation. Every iterate stays inside the bracket.
///
/// Requires: `f(a)` and `f(b)` of opposite sign (or one of them zero).
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the bracket
/// * `b` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Errors
///
/// - `MathError::InvalidBracket` if `f(a)` and `f(b)` share sign
/// - `MathError::InvalidInput` if either endpoint value is not finite
/// - `MathError::ConvergenceFailed` after `config.max_iterations`
///
/// # Example
///
/// ```rust
/// use pillar_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let fa = f(a);
    let fb = f(b);
    brent_with_endpoints(f, (a, fa), (b, fb), config)
}

/// Brent's method with the endpoint values already evaluated.
///
/// Lets callers evaluate `f(a)` and `f(b)` themselves (for instance
/// concurrently) without paying for them twice.
///
/// # Errors
///
/// Same as [`brent`].
pub fn brent_with_endpoints<F>(
    f: F,
    lower: (f64, f64),
    upper: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut fa) = lower;
    let (mut b, mut fb) = upper;

    if !fa.is_finite() || !fb.is_finite() {
        return Err(MathError::invalid_input(format!(
            "non-finite function value at bracket endpoint: f({a}) = {fa}, f({b}) = {fb}"
        )));
    }
    if fa == 0.0 {
        return Ok(SolverResult {
            root: a,
            iterations: 0,
            residual: fa,
        });
    }
    if fb == 0.0 {
        return Ok(SolverResult {
            root: b,
            iterations: 0,
            residual: fb,
        });
    }
    if fa.signum() == fb.signum() {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // c is the contrapoint: f(b) and f(c) always bracket the root.
    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for iteration in 1..=config.max_iterations {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = config.x_tolerance(b);
        let half_width = 0.5 * (c - b);

        if fb.abs() < config.tolerance || half_width.abs() <= tol {
            log::trace!("brent converged to {b} after {iteration} iterations (f = {fb:e})");
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant step
                (2.0 * half_width * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * half_width * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let limit_interp = 3.0 * half_width * q - (tol * q).abs();
            let limit_prev = (e * q).abs();
            if 2.0 * p < limit_interp.min(limit_prev) {
                e = d;
                d = p / q;
            } else {
                d = half_width;
                e = d;
            }
        } else {
            d = half_width;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else {
            tol.copysign(half_width)
        };
        fb = f(b);
    }

    Err(MathError::convergence_failed(config.max_iterations, fb.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_cubic() {
        let f = |x: f64| x * x * x - x - 2.0;

        let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-10);
        assert_relative_eq!(result.root, 1.521_379_706_804_568, epsilon = 1e-10);
    }

    #[test]
    fn test_reversed_bracket() {
        let f = |x: f64| x.sin();

        let result = brent(f, 4.0, 3.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_bracket_reports_endpoints() {
        let f = |x: f64| x * x - 2.0;

        let err = brent(f, 2.0, 3.0, &SolverConfig::default()).unwrap_err();

        match err {
            MathError::InvalidBracket { a, b, fa, fb } => {
                assert_eq!(a, 2.0);
                assert_eq!(b, 3.0);
                assert_relative_eq!(fa, 2.0);
                assert_relative_eq!(fb, 7.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_root_at_endpoint() {
        let f = |x: f64| x - 2.0;

        let result = brent(f, 1e-4, 2.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.root, 2.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_convergence_failure() {
        let f = |x: f64| x - 0.3;
        let config = SolverConfig::default().with_max_iterations(1);

        let err = brent(f, 1e-4, 2.0, &config).unwrap_err();

        assert!(matches!(err, MathError::ConvergenceFailed { iterations: 1, .. }));
    }

    #[test]
    fn test_non_finite_endpoint() {
        let f = |x: f64| if x > 1.0 { f64::NAN } else { x - 0.5 };

        let err = brent(f, 0.0, 2.0, &SolverConfig::default()).unwrap_err();

        assert!(matches!(err, MathError::InvalidInput { .. }));
    }

    #[test]
    fn test_precomputed_endpoints_match() {
        let f = |x: f64| (-x).exp() - 0.5;
        let config = SolverConfig::default();

        let direct = brent(f, 0.0, 2.0, &config).unwrap();
        let precomputed = brent_with_endpoints(f, (0.0, f(0.0)), (2.0, f(2.0)), &config).unwrap();

        assert_eq!(direct, precomputed);
        assert_relative_eq!(direct.root, std::f64::consts::LN_2, epsilon = 1e-11);
    }

    #[test]
    fn test_steep_discount_function() {
        // Shape of a bootstrap objective: linear in the unknown discount factor
        let f = |df: f64| 1.0 - df * (1.0 + 0.05 * 365.0 / 360.0);

        let result = brent(f, 1e-4, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.0 / (1.0 + 0.05 * 365.0 / 360.0), epsilon = 1e-12);
        assert!(result.iterations < 10);
    }
}
