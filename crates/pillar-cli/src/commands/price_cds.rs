//! CDS pricing command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, ValueEnum};
use pillar_products::cds::{CdsSide, CreditDefaultSwap};

use crate::cli::OutputFormat;
use crate::commands::{build_credit_curve, build_discount_curve, load_market};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the price-cds command.
#[derive(Args, Debug)]
pub struct CdsArgs {
    /// Market file (TOML)
    #[arg(short, long, env = "PILLAR_MARKET")]
    pub config: PathBuf,

    /// Maturity in months, rolled to the next CDS date
    #[arg(short, long)]
    pub maturity_months: u32,

    /// Running spread as a decimal (0.01 = 100bp)
    #[arg(short, long)]
    pub spread: f64,

    /// Protection side
    #[arg(long, value_enum, default_value = "seller")]
    pub side: SideChoice,

    /// Notional
    #[arg(short, long, default_value_t = 1_000_000.0)]
    pub nominal: f64,

    /// Recovery rate; defaults to the market file's
    #[arg(short, long)]
    pub recovery: Option<f64>,
}

/// Protection side choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SideChoice {
    /// Pays the premium, receives protection
    Buyer,
    /// Receives the premium, sells protection
    #[default]
    Seller,
}

impl From<SideChoice> for CdsSide {
    fn from(choice: SideChoice) -> Self {
        match choice {
            SideChoice::Buyer => CdsSide::Buyer,
            SideChoice::Seller => CdsSide::Seller,
        }
    }
}

/// Execute the price-cds command.
pub fn execute(args: &CdsArgs, format: OutputFormat) -> Result<()> {
    let market = load_market(&args.config)?;
    let (discount, _) = build_discount_curve(&market)?;
    let discount = Arc::new(discount);
    let (credit, _) = build_credit_curve(&market, Arc::clone(&discount))?;

    let recovery = match args.recovery {
        Some(recovery) => recovery,
        None => market.require_cds()?.recovery,
    };
    let cds = CreditDefaultSwap::new(
        market.observation_date,
        args.maturity_months,
        args.spread,
        recovery,
    )?
    .with_nominal(args.nominal)
    .with_side(args.side.into());

    tracing::info!(end = %cds.end_date(), spread = args.spread, "Pricing CDS");

    let rows = vec![
        KeyValue::from_f64("NPV", cds.npv(&discount, &credit), 2),
        KeyValue::from_bps("Par Spread", cds.par_spread(&discount, &credit)),
        KeyValue::from_f64("Risky Annuity", cds.risky_annuity(&discount, &credit), 6),
        KeyValue::from_f64("Premium Leg (unit)", cds.premium_leg_npv(&discount, &credit), 6),
        KeyValue::from_f64("Default Leg (unit)", cds.default_leg_npv(&discount, &credit), 6),
    ];

    if format == OutputFormat::Table {
        print_header(&format!("CDS ending {}", cds.end_date()));
    }
    print_output(&rows, format)
}
