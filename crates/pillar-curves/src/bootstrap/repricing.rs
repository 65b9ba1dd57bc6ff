//! Repricing audit for a bootstrapped curve.
//!
//! A solved curve should reproduce every input instrument's target. The
//! report records, per instrument, how far the curve misses and whether the
//! miss is within tolerance.

use std::fmt;

use serde::Serialize;

use crate::curves::Curve;
use crate::instrument::BootstrapInstrument;

/// One instrument valued on the curve it helped build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepricingCheck {
    /// Description of the instrument.
    pub instrument_id: String,

    /// The value the instrument was calibrated to.
    pub target: f64,

    /// The value on the solved curve.
    pub model_value: f64,

    /// Absolute error `|model_value - target|`.
    pub error: f64,

    /// Tolerance the error was compared against.
    pub tolerance: f64,

    /// Whether the error is within tolerance.
    pub passed: bool,
}

impl RepricingCheck {
    /// Compares `model_value` to `target`.
    #[must_use]
    pub fn new(instrument_id: String, target: f64, model_value: f64, tolerance: f64) -> Self {
        let error = (model_value - target).abs();
        Self {
            instrument_id,
            target,
            model_value,
            error,
            tolerance,
            passed: error <= tolerance,
        }
    }

    /// Reprices `instrument` on `curve`.
    #[must_use]
    pub fn from_instrument<C: Curve>(
        instrument: &dyn BootstrapInstrument<C>,
        curve: &C,
        tolerance: f64,
    ) -> Self {
        Self::new(
            instrument.description(),
            instrument.target(),
            instrument.npv(curve),
            tolerance,
        )
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "ok" } else { "FAIL" };
        write!(
            f,
            "[{status}] {} | value: {:.6e} | error: {:.2e} (tol: {:.2e})",
            self.instrument_id, self.model_value, self.error, self.tolerance
        )
    }
}

/// Every [`RepricingCheck`] of one bootstrap, with error statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    rms_error: f64,
    passed_count: usize,
}

impl RepricingReport {
    /// Summarises `checks`.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);
        let mean_sq = checks.iter().map(|c| c.error.powi(2)).sum::<f64>() / checks.len().max(1) as f64;
        let rms_error = mean_sq.sqrt();
        let passed_count = checks.iter().filter(|c| c.passed).count();

        Self {
            checks,
            max_error,
            rms_error,
            passed_count,
        }
    }

    /// `true` when no check failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.passed_count == self.checks.len()
    }

    /// Checks in maturity order.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Largest absolute error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Root mean square of the errors.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Checks within tolerance.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    /// Checks outside tolerance.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count
    }

    /// Descriptions of the failing instruments.
    #[must_use]
    pub fn failed_instruments(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.instrument_id.as_str())
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}/{} repriced, max error {:.2e}, rms {:.2e}",
            self.passed_count,
            self.checks.len(),
            self.max_error,
            self.rms_error
        )?;
        for check in &self.checks {
            writeln!(f, "  {check}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_check_passes_within_tolerance() {
        let check = RepricingCheck::new("OIS 1Y".into(), 0.0, 5e-13, 1e-9);
        assert!(check.passed);
        assert_relative_eq!(check.error, 5e-13);
    }

    #[test]
    fn test_check_fails_outside_tolerance() {
        let check = RepricingCheck::new("CDS 5Y".into(), 0.01, 0.0102, 1e-6);
        assert!(!check.passed);
        assert!(check.to_string().contains("FAIL"));
    }

    #[test]
    fn test_report_statistics() {
        let report = RepricingReport::new(vec![
            RepricingCheck::new("a".into(), 0.0, 3e-7, 1e-6),
            RepricingCheck::new("b".into(), 0.0, -4e-6, 1e-6),
        ]);

        assert!(!report.is_valid());
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.failed_instruments(), vec!["b"]);
        assert_relative_eq!(report.max_error(), 4e-6);
        assert_relative_eq!(
            report.rms_error(),
            ((9e-14 + 1.6e-11) / 2.0_f64).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = RepricingReport::new(Vec::new());
        assert!(report.is_valid());
        assert_eq!(report.max_error(), 0.0);
        assert_eq!(report.rms_error(), 0.0);
    }

    #[test]
    fn test_report_display_lists_checks() {
        let report = RepricingReport::new(vec![RepricingCheck::new("OIS 1Y".into(), 0.0, 0.0, 1e-9)]);
        let text = report.to_string();
        assert!(text.starts_with("1/1 repriced"));
        assert!(text.contains("[ok] OIS 1Y"));
    }
}
