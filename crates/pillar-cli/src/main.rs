//! Pillar CLI - curve bootstrapping from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap the discount curve described in a market file
//! pillar ois --config market.toml
//!
//! # Bootstrap the credit curve on top of it, as JSON
//! pillar --format json credit --config market.toml
//!
//! # Price a 5Y protection-buyer CDS at 120bp
//! pillar price-cds --config market.toml --maturity-months 60 --spread 0.012 --side buyer
//!
//! # Check a market file without building anything
//! pillar validate --config market.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info,pillar=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Ois(args) => commands::ois::execute(&args, format)?,
        Commands::Credit(args) => commands::credit::execute(&args, format)?,
        Commands::PriceCds(args) => commands::price_cds::execute(&args, format)?,
        Commands::Validate(args) => commands::validate::execute(&args)?,
    }

    Ok(())
}
