//! CLI command implementations.

pub mod credit;
pub mod ois;
pub mod price_cds;
pub mod validate;

pub use price_cds::CdsArgs;
pub use validate::ValidateArgs;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use pillar_config::{MarketConfig, SolverSettings};
use pillar_curves::bootstrap::RepricingReport;
use pillar_curves::{BootstrapConfig, CreditCurve, DiscountCurve};
use pillar_products::calibration::{
    calibrate_credit_curve, calibrate_discount_curve, CdsQuote, OisQuote,
};

use crate::error::{CliError, CliResult};

/// Largest repricing error accepted after a bootstrap.
pub const REPRICING_TOLERANCE: f64 = 1e-8;

/// Arguments shared by the curve commands.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Market file (TOML)
    #[arg(short, long, env = "PILLAR_MARKET")]
    pub config: PathBuf,

    /// Print how well each quote is repriced
    #[arg(long)]
    pub show_repricing: bool,
}

/// Loads and validates a market file.
pub fn load_market(path: &Path) -> CliResult<MarketConfig> {
    tracing::debug!(path = %path.display(), "Loading market file");
    Ok(MarketConfig::from_file(path)?)
}

/// Converts file-level solver settings into a bootstrap configuration.
pub fn bootstrap_config(settings: &SolverSettings) -> BootstrapConfig {
    BootstrapConfig::default()
        .with_bracket(settings.lower_bound, settings.upper_bound)
        .with_tolerance(settings.tolerance)
        .with_relative_tolerance(settings.relative_tolerance)
        .with_max_iterations(settings.max_iterations)
}

/// Fails when any quote is not repriced within [`REPRICING_TOLERANCE`].
fn ensure_repriced(report: &RepricingReport) -> CliResult<()> {
    if report.is_valid() {
        return Ok(());
    }
    Err(CliError::Repricing {
        failed: report.failed_count(),
        instruments: report.failed_instruments().join(", "),
    })
}

/// Bootstraps the discount curve from the OIS quotes of `market`.
pub fn build_discount_curve(market: &MarketConfig) -> CliResult<(DiscountCurve, RepricingReport)> {
    let quotes: Vec<_> = market
        .ois
        .iter()
        .map(|q| OisQuote::new(q.maturity_months, q.rate).with_fixed_tenor(q.fixed_tenor_months))
        .collect();
    let bootstrapper = calibrate_discount_curve(
        market.observation_date,
        &quotes,
        bootstrap_config(&market.solver),
    )?;

    let report = bootstrapper.repricing_report(REPRICING_TOLERANCE)?;
    ensure_repriced(&report)?;
    Ok((bootstrapper.into_curve()?, report))
}

/// Bootstraps the credit curve from the CDS quotes of `market` on `discount`.
pub fn build_credit_curve(
    market: &MarketConfig,
    discount: Arc<DiscountCurve>,
) -> CliResult<(CreditCurve, RepricingReport)> {
    let cds = market.require_cds()?;
    let quotes: Vec<_> = cds
        .quotes
        .iter()
        .map(|q| CdsQuote::new(q.maturity_months, q.spread))
        .collect();
    let bootstrapper =
        calibrate_credit_curve(discount, &quotes, cds.recovery, bootstrap_config(&market.solver))?;

    let report = bootstrapper.repricing_report(REPRICING_TOLERANCE)?;
    ensure_repriced(&report)?;
    Ok((bootstrapper.into_curve()?, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_settings_carry_over() {
        let settings = SolverSettings {
            lower_bound: 0.5,
            upper_bound: 1.5,
            tolerance: 1e-9,
            relative_tolerance: 0.0,
            max_iterations: 42,
        };
        let config = bootstrap_config(&settings);
        assert_eq!(config.lower_bound, 0.5);
        assert_eq!(config.upper_bound, 1.5);
        assert_eq!(config.tolerance, 1e-9);
        assert_eq!(config.relative_tolerance, 0.0);
        assert_eq!(config.max_iterations, 42);
    }

    #[test]
    fn test_default_settings_match_bootstrap_defaults() {
        assert_eq!(
            bootstrap_config(&SolverSettings::default()),
            BootstrapConfig::default()
        );
    }
}
