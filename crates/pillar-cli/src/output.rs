//! Rendering command results as tables, JSON or CSV.

use std::io;

use colored::Colorize;
use pillar_curves::bootstrap::RepricingReport;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Writes `rows` to stdout in `format`.
pub fn print_output<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("(no pillars)"),
        OutputFormat::Table => {
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            println!("{table}");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => write_csv(rows, io::stdout())?,
    }
    Ok(())
}

fn write_csv<T: Serialize, W: io::Write>(rows: &[T], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Lists every repricing check with the error summary.
pub fn print_repricing(report: &RepricingReport) {
    print_header("Repricing");
    for check in report.checks() {
        println!("  {check}");
    }
    let summary = format!(
        "{}/{} within tolerance, max error {:.2e}, rms {:.2e}",
        report.passed_count(),
        report.checks().len(),
        report.max_error(),
        report.rms_error()
    );
    if report.is_valid() {
        println!("  {}", summary.green());
    } else {
        println!("  {}", summary.red());
    }
}

/// Prints a green check mark and `message`.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a bold, underlined section title.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A named scalar result.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// `value` rounded to `precision` decimals.
    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self {
            key: key.into(),
            value: format!("{value:.precision$}"),
        }
    }

    /// A rate shown in basis points.
    pub fn from_bps(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.2} bps", value * 10_000.0),
        }
    }
}
