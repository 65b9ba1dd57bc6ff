//! Market file validation command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::commands::load_market;
use crate::output::print_success;

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Market file (TOML)
    #[arg(short, long, env = "PILLAR_MARKET")]
    pub config: PathBuf,
}

/// Execute the validate command.
pub fn execute(args: &ValidateArgs) -> Result<()> {
    let market = load_market(&args.config)?;
    let cds_quotes = market.cds.as_ref().map_or(0, |cds| cds.quotes.len());
    print_success(&format!(
        "{}: {} OIS quote(s), {} CDS quote(s) as of {}",
        args.config.display(),
        market.ois.len(),
        cds_quotes,
        market.observation_date
    ));
    Ok(())
}
