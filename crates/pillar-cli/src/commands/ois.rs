//! OIS discount curve command.

use anyhow::Result;
use pillar_core::daycounts::{Act365Fixed, DayCount};
use pillar_curves::Curve;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{build_discount_curve, load_market, CurveArgs};
use crate::output::{print_header, print_output, print_repricing};

/// One solved discount pillar.
#[derive(Debug, Serialize, Tabled)]
struct DiscountPillar {
    #[tabled(rename = "Pillar")]
    date: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: f64,
    #[tabled(rename = "Zero Rate (%)")]
    zero_rate: String,
}

/// Execute the ois command.
pub fn execute(args: &CurveArgs, format: OutputFormat) -> Result<()> {
    let market = load_market(&args.config)?;
    let (curve, report) = build_discount_curve(&market)?;
    let obs = curve.observation_date();

    // Continuously compounded Act/365F zero rates; the anchor has none.
    let rows: Vec<_> = curve
        .pillar_curve()
        .pillars()
        .skip(1)
        .map(|(date, df)| DiscountPillar {
            date: date.to_string(),
            discount_factor: df,
            zero_rate: format!("{:.4}", -df.ln() / Act365Fixed.year_fraction(obs, date) * 100.0),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("Discount curve as of {obs}"));
    }
    print_output(&rows, format)?;
    if args.show_repricing && format == OutputFormat::Table {
        print_repricing(&report);
    }
    Ok(())
}
