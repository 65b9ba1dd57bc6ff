//! Credit curve command.

use std::sync::Arc;

use anyhow::Result;
use pillar_curves::Curve;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{build_credit_curve, build_discount_curve, load_market, CurveArgs};
use crate::output::{print_header, print_output, print_repricing};

/// One solved survival pillar.
#[derive(Debug, Serialize, Tabled)]
struct CreditPillar {
    #[tabled(rename = "Pillar")]
    date: String,
    #[tabled(rename = "Survival")]
    survival_probability: f64,
    /// Hazard over the segment ending at this pillar.
    #[tabled(rename = "Hazard Rate (%)")]
    hazard_rate: String,
}

/// Execute the credit command.
pub fn execute(args: &CurveArgs, format: OutputFormat) -> Result<()> {
    let market = load_market(&args.config)?;
    let (discount, _) = build_discount_curve(&market)?;
    let (curve, report) = build_credit_curve(&market, Arc::new(discount))?;

    let rows: Vec<_> = curve
        .pillar_curve()
        .pillars()
        .skip(1)
        .map(|(date, survival)| CreditPillar {
            date: date.to_string(),
            survival_probability: survival,
            hazard_rate: format!("{:.4}", curve.hazard_rate(date.add_days(-1)) * 100.0),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("Credit curve as of {}", curve.observation_date()));
    }
    print_output(&rows, format)?;
    if args.show_repricing && format == OutputFormat::Table {
        print_repricing(&report);
    }
    Ok(())
}
