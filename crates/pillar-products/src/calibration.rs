//! Curve calibration from market quotes.
//!
//! Thin wrappers that turn quotes into bootstrap instruments and run the
//! generic [`CurveBootstrapper`].

use std::sync::Arc;

use pillar_core::Date;
use pillar_curves::{BootstrapConfig, CreditCurve, Curve, CurveBootstrapper, DiscountCurve};
use serde::{Deserialize, Serialize};

use crate::cds::CdsParQuote;
use crate::error::ProductResult;
use crate::ois::{OvernightIndexSwap, SwapType};

/// Market convention for the OIS fixed leg, in months.
pub const DEFAULT_OIS_FIXED_TENOR_MONTHS: u32 = 12;

/// A par OIS rate for a spot-starting swap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OisQuote {
    /// Maturity in months from the observation date.
    pub maturity_months: u32,
    /// Fixed leg payment interval in months.
    pub fixed_tenor_months: u32,
    /// Par fixed rate.
    pub rate: f64,
}

impl OisQuote {
    /// Creates a quote with an annual fixed leg.
    #[must_use]
    pub fn new(maturity_months: u32, rate: f64) -> Self {
        Self {
            maturity_months,
            fixed_tenor_months: DEFAULT_OIS_FIXED_TENOR_MONTHS,
            rate,
        }
    }

    /// Sets the fixed leg payment interval.
    #[must_use]
    pub fn with_fixed_tenor(mut self, fixed_tenor_months: u32) -> Self {
        self.fixed_tenor_months = fixed_tenor_months;
        self
    }
}

/// A par CDS spread for a spot-starting contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdsQuote {
    /// Maturity in months before rolling to the next CDS date.
    pub maturity_months: u32,
    /// Par running spread.
    pub spread: f64,
}

impl CdsQuote {
    /// Creates a quote.
    #[must_use]
    pub fn new(maturity_months: u32, spread: f64) -> Self {
        Self {
            maturity_months,
            spread,
        }
    }
}

/// Runs the discount bootstrap and returns the solved driver.
///
/// The driver can still produce a
/// [`RepricingReport`](pillar_curves::bootstrap::RepricingReport) before it
/// is turned into a curve.
pub fn calibrate_discount_curve(
    observation_date: Date,
    quotes: &[OisQuote],
    config: BootstrapConfig,
) -> ProductResult<CurveBootstrapper<DiscountCurve>> {
    let mut bootstrapper = CurveBootstrapper::new(observation_date).with_config(config);
    for quote in quotes {
        bootstrapper.add_instrument(OvernightIndexSwap::standard(
            observation_date,
            quote.maturity_months,
            quote.fixed_tenor_months,
            quote.rate,
            1.0,
            SwapType::Receiver,
        )?)?;
    }
    bootstrapper.run()?;
    tracing::debug!(quotes = quotes.len(), "Discount curve calibrated");
    Ok(bootstrapper)
}

/// Bootstraps a discount curve from receiver OIS quotes.
///
/// Quotes must be in increasing maturity order.
pub fn bootstrap_discount_curve(
    observation_date: Date,
    quotes: &[OisQuote],
    config: BootstrapConfig,
) -> ProductResult<DiscountCurve> {
    Ok(calibrate_discount_curve(observation_date, quotes, config)?.into_curve()?)
}

/// Runs the credit bootstrap on `discount` and returns the solved driver.
pub fn calibrate_credit_curve(
    discount: Arc<DiscountCurve>,
    quotes: &[CdsQuote],
    recovery: f64,
    config: BootstrapConfig,
) -> ProductResult<CurveBootstrapper<CreditCurve>> {
    let observation_date = discount.observation_date();
    let mut bootstrapper = CurveBootstrapper::new(observation_date).with_config(config);
    for quote in quotes {
        bootstrapper.add_instrument(CdsParQuote::new(
            Arc::clone(&discount),
            quote.maturity_months,
            quote.spread,
            recovery,
        )?)?;
    }
    bootstrapper.run()?;
    tracing::debug!(quotes = quotes.len(), recovery, "Credit curve calibrated");
    Ok(bootstrapper)
}

/// Bootstraps a credit curve from par CDS spreads.
///
/// Each quote becomes a [`CdsParQuote`] on `discount`; the survival pillar
/// at each CDS end date is solved so the par spread matches the quote.
/// Quotes must be in increasing maturity order, and two quotes that roll to
/// the same CDS date are rejected as unordered.
pub fn bootstrap_credit_curve(
    discount: Arc<DiscountCurve>,
    quotes: &[CdsQuote],
    recovery: f64,
    config: BootstrapConfig,
) -> ProductResult<CreditCurve> {
    Ok(calibrate_credit_curve(discount, quotes, recovery, config)?.into_curve()?)
}
