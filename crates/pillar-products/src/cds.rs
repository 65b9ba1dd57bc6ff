//! Credit default swaps.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use pillar_core::daycounts::{Act360, DayCount};
use pillar_core::schedule::{generate_schedule, next_cds_roll_date};
use pillar_core::Date;
use pillar_curves::{BootstrapInstrument, CreditCurve, Curve, DiscountCurve};
use serde::{Deserialize, Serialize};

use crate::error::{ProductError, ProductResult};

/// Months between premium payments.
const PREMIUM_TENOR_MONTHS: u32 = 3;

/// Which side of the protection a position is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CdsSide {
    /// Pays the premium, receives the default payment.
    Buyer,
    /// Receives the premium, pays the default payment.
    #[default]
    Seller,
}

impl CdsSide {
    fn sign(self) -> f64 {
        match self {
            Self::Buyer => -1.0,
            Self::Seller => 1.0,
        }
    }
}

impl fmt::Display for CdsSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buyer => write!(f, "buyer"),
            Self::Seller => write!(f, "seller"),
        }
    }
}

impl FromStr for CdsSide {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buyer" | "protection_buyer" => Ok(Self::Buyer),
            "seller" | "protection_seller" => Ok(Self::Seller),
            other => Err(ProductError::invalid_product(format!("unknown CDS side '{other}'"))),
        }
    }
}

/// A credit default swap.
///
/// The protection term ends on the first CDS roll date (20 March, June,
/// September or December) on or after `start + maturity`. The premium is
/// paid quarterly on ACT/360 accruals while the name survives; the default
/// leg pays `1 - recovery` at default.
///
/// Leg values are quoted per unit nominal from the protection seller's side.
/// [`npv`](Self::npv) applies the nominal and the position side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditDefaultSwap {
    start_date: Date,
    end_date: Date,
    spread: f64,
    recovery: f64,
    nominal: f64,
    side: CdsSide,
    premium_dates: Vec<Date>,
}

impl CreditDefaultSwap {
    /// Creates a CDS sold on unit nominal.
    ///
    /// # Errors
    ///
    /// `InvalidProduct` if `recovery` is outside `[0, 1)`, or a core error if
    /// the dates cannot be generated.
    pub fn new(start_date: Date, maturity_months: u32, spread: f64, recovery: f64) -> ProductResult<Self> {
        if !(0.0..1.0).contains(&recovery) {
            return Err(ProductError::invalid_product(format!(
                "recovery {recovery} must lie in [0, 1)"
            )));
        }
        let months = i32::try_from(maturity_months)
            .map_err(|_| ProductError::invalid_product("maturity out of range"))?;
        let end_date = next_cds_roll_date(start_date.add_months(months)?)?;
        let premium_dates = generate_schedule(start_date, end_date, PREMIUM_TENOR_MONTHS)?;

        Ok(Self {
            start_date,
            end_date,
            spread,
            recovery,
            nominal: 1.0,
            side: CdsSide::Seller,
            premium_dates,
        })
    }

    /// Sets the absolute nominal.
    #[must_use]
    pub fn with_nominal(mut self, nominal: f64) -> Self {
        self.nominal = nominal;
        self
    }

    /// Sets the position side.
    #[must_use]
    pub fn with_side(mut self, side: CdsSide) -> Self {
        self.side = side;
        self
    }

    /// Protection start.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Protection end, a CDS roll date.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Running spread.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Recovery rate.
    pub fn recovery(&self) -> f64 {
        self.recovery
    }

    /// Absolute nominal.
    pub fn nominal(&self) -> f64 {
        self.nominal
    }

    /// Position side.
    pub fn side(&self) -> CdsSide {
        self.side
    }

    /// Premium period boundaries, starting with the start date.
    pub fn premium_dates(&self) -> &[Date] {
        &self.premium_dates
    }

    /// Sum of `df * S * tau` over the premium periods.
    pub fn risky_annuity(&self, discount: &DiscountCurve, credit: &CreditCurve) -> f64 {
        self.premium_dates
            .windows(2)
            .map(|p| {
                let pay = p[1];
                discount.discount_factor(pay)
                    * credit.survival_probability(pay)
                    * Act360.year_fraction(p[0], pay)
            })
            .sum()
    }

    /// Value of the premium leg per unit nominal.
    pub fn premium_leg_npv(&self, discount: &DiscountCurve, credit: &CreditCurve) -> f64 {
        self.risky_annuity(discount, credit) * self.spread
    }

    /// Value of the default leg per unit nominal.
    ///
    /// Sums `df(d) * S(d) * h(d) / 365 * (1 - R)` over every day `d` from the
    /// start date up to, not including, the end date.
    pub fn default_leg_npv(&self, discount: &DiscountCurve, credit: &CreditCurve) -> f64 {
        let loss = 1.0 - self.recovery;
        loss * discounted_default_probability(discount, credit, self.start_date, self.end_date)
    }

    /// Spread at which the two legs have equal value.
    pub fn par_spread(&self, discount: &DiscountCurve, credit: &CreditCurve) -> f64 {
        self.default_leg_npv(discount, credit) / self.risky_annuity(discount, credit)
    }

    /// Value of the position: premium minus default leg for the seller,
    /// negated for the buyer, times the nominal.
    pub fn npv(&self, discount: &DiscountCurve, credit: &CreditCurve) -> f64 {
        let seller = self.premium_leg_npv(discount, credit) - self.default_leg_npv(discount, credit);
        self.side.sign() * self.nominal * seller
    }
}

/// Discounted probability of default in `[from, to)`, stepped daily.
///
/// `sum df(d) * S(d) * h(d) / 365` over every day `d` with `from <= d < to`.
pub(crate) fn discounted_default_probability(
    discount: &DiscountCurve,
    credit: &CreditCurve,
    from: Date,
    to: Date,
) -> f64 {
    (0..from.days_between(&to).max(0))
        .map(|offset| {
            let day = from.add_days(offset);
            discount.discount_factor(day) * credit.survival_probability(day) * credit.hazard_rate(day)
                / 365.0
        })
        .sum()
}

/// A quoted CDS par spread, as a credit bootstrap instrument.
///
/// Holds the discount curve fixed and matches the par spread implied by the
/// trial survival curve to the quote.
#[derive(Debug, Clone)]
pub struct CdsParQuote {
    cds: CreditDefaultSwap,
    discount: Arc<DiscountCurve>,
}

impl CdsParQuote {
    /// Creates a par quote for a spot-starting CDS.
    pub fn new(
        discount: Arc<DiscountCurve>,
        maturity_months: u32,
        spread: f64,
        recovery: f64,
    ) -> ProductResult<Self> {
        let cds = CreditDefaultSwap::new(discount.observation_date(), maturity_months, spread, recovery)?;
        Ok(Self { cds, discount })
    }

    /// The quoted contract.
    pub fn cds(&self) -> &CreditDefaultSwap {
        &self.cds
    }
}

impl BootstrapInstrument<CreditCurve> for CdsParQuote {
    fn end_date(&self) -> Date {
        self.cds.end_date()
    }

    fn npv(&self, curve: &CreditCurve) -> f64 {
        self.cds.par_spread(&self.discount, curve)
    }

    fn target(&self) -> f64 {
        self.cds.spread()
    }

    fn description(&self) -> String {
        format!(
            "CDS {} {:.1}bp",
            self.cds.end_date(),
            self.cds.spread() * 10_000.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pillar_core::CoreError;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn curves() -> (DiscountCurve, CreditCurve) {
        let today = date(2010, 1, 1);
        let pillars = vec![date(2011, 1, 1), date(2012, 1, 1)];
        let discount = DiscountCurve::new(today, pillars.clone(), vec![0.9, 0.8]).unwrap();
        let credit = CreditCurve::new(today, pillars, vec![0.95, 0.9]).unwrap();
        (discount, credit)
    }

    #[test]
    fn test_end_date_rolls_forward() {
        let cds = CreditDefaultSwap::new(date(2010, 1, 1), 12, 0.03, 0.4).unwrap();
        assert_eq!(cds.end_date(), date(2011, 3, 20));
        assert_eq!(cds.premium_dates().first(), Some(&date(2010, 1, 1)));
        assert_eq!(cds.premium_dates().last(), Some(&date(2011, 3, 20)));
        assert_eq!(cds.premium_dates().len(), 6);

        let on_roll = CreditDefaultSwap::new(date(2010, 3, 20), 3, 0.03, 0.4).unwrap();
        assert_eq!(on_roll.end_date(), date(2010, 6, 20));
    }

    #[test]
    fn test_default_leg_is_zero_without_default_risk() {
        let (discount, _) = curves();
        let riskless = CreditCurve::new(date(2010, 1, 1), vec![date(2015, 1, 1)], vec![1.0]).unwrap();
        let cds = CreditDefaultSwap::new(date(2010, 1, 1), 24, 0.01, 0.4).unwrap();

        assert_eq!(cds.default_leg_npv(&discount, &riskless), 0.0);
        assert_relative_eq!(
            cds.npv(&discount, &riskless),
            cds.risky_annuity(&discount, &riskless) * 0.01,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_default_leg_approximates_loss_given_default() {
        // Flat zero rates: the default leg is close to (1 - R) * (1 - S(T)).
        let today = date(2010, 1, 1);
        let discount = DiscountCurve::new(today, vec![date(2020, 1, 1)], vec![1.0]).unwrap();
        let (_, credit) = curves();
        let cds = CreditDefaultSwap::new(today, 12, 0.03, 0.4).unwrap();

        let expected = 0.6 * (1.0 - credit.survival_probability(cds.end_date()));
        assert_relative_eq!(cds.default_leg_npv(&discount, &credit), expected, max_relative = 1e-3);
    }

    #[test]
    fn test_par_spread_zeroes_npv() {
        let (discount, credit) = curves();
        let unpriced = CreditDefaultSwap::new(date(2010, 1, 1), 12, 0.0, 0.4).unwrap();
        let par = unpriced.par_spread(&discount, &credit);

        let at_par = CreditDefaultSwap::new(date(2010, 1, 1), 12, par, 0.4).unwrap();
        assert_relative_eq!(at_par.npv(&discount, &credit), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_buyer_and_nominal() {
        let (discount, credit) = curves();
        let seller = CreditDefaultSwap::new(date(2010, 1, 1), 12, 0.03, 0.4).unwrap();
        let buyer = seller.clone().with_side(CdsSide::Buyer).with_nominal(1e6);

        assert_relative_eq!(
            buyer.npv(&discount, &credit),
            -1e6 * seller.npv(&discount, &credit),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_invalid_recovery() {
        assert!(CreditDefaultSwap::new(date(2010, 1, 1), 12, 0.03, 1.0).is_err());
        assert!(CreditDefaultSwap::new(date(2010, 1, 1), 12, 0.03, -0.1).is_err());
    }

    #[test]
    fn test_maturity_beyond_calendar_is_an_error() {
        let err = CreditDefaultSwap::new(date(2010, 1, 1), i32::MAX as u32, 0.03, 0.4).unwrap_err();
        assert!(matches!(err, ProductError::Core(CoreError::InvalidDate { .. })));
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("Buyer".parse::<CdsSide>().unwrap(), CdsSide::Buyer);
        assert_eq!("seller".parse::<CdsSide>().unwrap(), CdsSide::Seller);
        assert!("neither".parse::<CdsSide>().is_err());
    }
}
