//! Integration test: discount and credit curves from OIS and CDS quotes,
//! then pricing off the calibrated curves.

use std::sync::Arc;

use pillar_core::{Date, Frequency};
use pillar_products::prelude::*;

use approx::assert_relative_eq;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn ois_quotes() -> Vec<OisQuote> {
    vec![
        OisQuote::new(1, 0.02),
        OisQuote::new(2, 0.022),
        OisQuote::new(3, 0.025),
        OisQuote::new(6, 0.03),
        OisQuote::new(12, 0.04),
        OisQuote::new(18, 0.045),
        OisQuote::new(24, 0.05),
        OisQuote::new(60, 0.052),
    ]
}

fn cds_quotes() -> Vec<CdsQuote> {
    vec![
        CdsQuote::new(12, 0.010),
        CdsQuote::new(24, 0.012),
        CdsQuote::new(36, 0.014),
        CdsQuote::new(60, 0.018),
    ]
}

// =============================================================================
// DISCOUNT CURVE
// =============================================================================

#[test]
fn test_ois_quotes_reprice() {
    let today = date(2010, 1, 1);
    let curve = bootstrap_discount_curve(today, &ois_quotes(), BootstrapConfig::default()).unwrap();

    for quote in ois_quotes() {
        let ois = OvernightIndexSwap::standard(
            today,
            quote.maturity_months,
            quote.fixed_tenor_months,
            quote.rate,
            1.0,
            SwapType::Receiver,
        )
        .unwrap();
        assert!(ois.npv(&curve).abs() < 1e-10, "{} misprices", quote.maturity_months);
        assert_relative_eq!(ois.par_rate(&curve), quote.rate, epsilon = 1e-9);
    }
}

#[test]
fn test_discount_factors_decrease_for_positive_rates() {
    let today = date(2010, 1, 1);
    let curve = bootstrap_discount_curve(today, &ois_quotes(), BootstrapConfig::default()).unwrap();

    let values = curve.pillar_curve().pillar_values();
    assert_eq!(values[0], 1.0);
    assert!(values.windows(2).all(|w| w[1] < w[0]));
}

// =============================================================================
// CREDIT CURVE
// =============================================================================

#[test]
fn test_cds_quotes_reprice() {
    let today = date(2010, 1, 1);
    let discount = Arc::new(
        bootstrap_discount_curve(today, &ois_quotes(), BootstrapConfig::default()).unwrap(),
    );
    let credit =
        bootstrap_credit_curve(Arc::clone(&discount), &cds_quotes(), 0.4, BootstrapConfig::default())
            .unwrap();

    assert_eq!(credit.survival_probability(today), 1.0);
    for quote in cds_quotes() {
        let cds = CreditDefaultSwap::new(today, quote.maturity_months, quote.spread, 0.4).unwrap();
        assert_relative_eq!(cds.par_spread(&discount, &credit), quote.spread, epsilon = 1e-9);
        assert!(cds.npv(&discount, &credit).abs() < 1e-9);
    }
}

#[test]
fn test_credit_triangle_holds_for_flat_spreads() {
    let today = date(2010, 1, 1);
    let discount = Arc::new(
        bootstrap_discount_curve(today, &ois_quotes(), BootstrapConfig::default()).unwrap(),
    );
    let quotes = [CdsQuote::new(12, 0.01), CdsQuote::new(36, 0.01), CdsQuote::new(60, 0.01)];
    let credit = bootstrap_credit_curve(discount, &quotes, 0.4, BootstrapConfig::default()).unwrap();

    // h ~ s / (1 - R), with the ACT/360 premium accrual
    let expected = 0.01 * 365.0 / 360.0 / 0.6;
    for day in [date(2010, 7, 1), date(2012, 7, 1), date(2014, 7, 1)] {
        assert_relative_eq!(credit.hazard_rate(day), expected, max_relative = 0.05);
    }

    let values = credit.pillar_curve().pillar_values();
    assert!(values.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn test_calibrated_drivers_report_repricing() {
    let today = date(2010, 1, 1);
    let discount = calibrate_discount_curve(today, &ois_quotes(), BootstrapConfig::default()).unwrap();
    assert_eq!(discount.phase(), BootstrapPhase::Solved);

    let report = discount.repricing_report(1e-8).unwrap();
    assert_eq!(report.checks().len(), ois_quotes().len());
    assert!(report.is_valid());

    let discount = Arc::new(discount.into_curve().unwrap());
    let credit =
        calibrate_credit_curve(discount, &cds_quotes(), 0.4, BootstrapConfig::default()).unwrap();
    let report = credit.repricing_report(1e-8).unwrap();
    assert_eq!(report.failed_count(), 0);
    assert_eq!(credit.result().unwrap().pillar_curve().pillar_count(), cds_quotes().len() + 1);
}

#[test]
fn test_unordered_cds_quotes_are_rejected() {
    let today = date(2010, 1, 1);
    let discount = Arc::new(
        bootstrap_discount_curve(today, &ois_quotes(), BootstrapConfig::default()).unwrap(),
    );
    // 13 and 14 months both roll to 2011-03-20
    let quotes = [CdsQuote::new(13, 0.01), CdsQuote::new(14, 0.011)];

    let err = bootstrap_credit_curve(discount, &quotes, 0.4, BootstrapConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ProductError::Curve(CurveError::UnorderedInstrument { .. })
    ));
}

// =============================================================================
// PRICING OFF CALIBRATED CURVES
// =============================================================================

#[test]
fn test_risky_bond_below_riskless_bond() {
    let today = date(2010, 1, 1);
    let discount = Arc::new(
        bootstrap_discount_curve(today, &ois_quotes(), BootstrapConfig::default()).unwrap(),
    );
    let credit =
        bootstrap_credit_curve(Arc::clone(&discount), &cds_quotes(), 0.4, BootstrapConfig::default())
            .unwrap();
    let riskless = CreditCurve::new(today, vec![date(2030, 1, 1)], vec![1.0]).unwrap();

    let bond = FixedCouponBond::new(100.0, today, date(2014, 1, 1), Frequency::SemiAnnual, 0.05, 0.4)
        .unwrap();
    let risky = bond.npv(&discount, &credit);
    let safe = bond.npv(&discount, &riskless);

    assert!(risky < safe);
    assert!(risky > 0.8 * safe);
}
