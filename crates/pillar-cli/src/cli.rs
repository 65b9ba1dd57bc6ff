//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CdsArgs, CurveArgs, ValidateArgs};

/// Pillar - sequential curve bootstrapping
#[derive(Parser)]
#[command(name = "pillar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log each solved pillar to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bootstrap a discount curve from OIS quotes
    Ois(CurveArgs),

    /// Bootstrap a credit curve from CDS quotes
    Credit(CurveArgs),

    /// Price a CDS on the bootstrapped curves
    PriceCds(CdsArgs),

    /// Validate a market file
    Validate(ValidateArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
