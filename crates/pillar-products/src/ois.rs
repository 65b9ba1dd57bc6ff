//! Overnight index swaps.

use std::fmt;
use std::str::FromStr;

use pillar_core::daycounts::{Act360, DayCount};
use pillar_core::schedule::generate_schedule;
use pillar_core::Date;
use pillar_curves::{BootstrapInstrument, DiscountCurve};
use serde::{Deserialize, Serialize};

use crate::error::{check_opposite_nominals, ProductError, ProductResult};

/// Direction of a fixed-for-floating swap, seen from the fixed leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapType {
    /// Receive fixed, pay floating.
    #[default]
    Receiver,
    /// Pay fixed, receive floating.
    Payer,
}

impl SwapType {
    /// Signed `(floating, fixed)` leg nominals for an absolute `nominal`.
    #[must_use]
    pub fn leg_nominals(self, nominal: f64) -> (f64, f64) {
        match self {
            Self::Receiver => (-nominal, nominal),
            Self::Payer => (nominal, -nominal),
        }
    }
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receiver => write!(f, "receiver"),
            Self::Payer => write!(f, "payer"),
        }
    }
}

impl FromStr for SwapType {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "receiver" => Ok(Self::Receiver),
            "payer" => Ok(Self::Payer),
            other => Err(ProductError::invalid_product(format!(
                "unknown swap type '{other}'"
            ))),
        }
    }
}

/// An overnight index swap.
///
/// The compounded overnight leg is valued by telescoping on the discount
/// curve, `(df(start) - df(end)) * floating_nominal`, and the fixed leg pays
/// `rate * tau` (ACT/360) at the end of every fixed period. A positive
/// nominal means the leg is received.
///
/// # Example
///
/// ```rust
/// use pillar_core::Date;
/// use pillar_curves::DiscountCurve;
/// use pillar_products::ois::{OvernightIndexSwap, SwapType};
///
/// let today = Date::from_ymd(2010, 1, 1).unwrap();
/// let ois = OvernightIndexSwap::standard(today, 12, 12, 0.02, 1.0, SwapType::Receiver).unwrap();
///
/// let df = 1.0 / (1.0 + 0.02 * 365.0 / 360.0);
/// let curve = DiscountCurve::new(today, vec![ois.end_date()], vec![df]).unwrap();
/// assert!(ois.npv(&curve).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvernightIndexSwap {
    start_date: Date,
    end_date: Date,
    floating_nominal: f64,
    fixed_dates: Vec<Date>,
    fixed_rate: f64,
    fixed_nominal: f64,
}

impl OvernightIndexSwap {
    /// Creates a swap from explicit legs.
    ///
    /// `fixed_dates` are the fixed period boundaries: the first is the
    /// accrual start and each later date ends one period and is paid on.
    ///
    /// # Errors
    ///
    /// - `SameSignNominals` if both legs are received or both paid
    /// - `InvalidProduct` if `end_date <= start_date` or fewer than two
    ///   fixed dates are given
    pub fn new(
        start_date: Date,
        end_date: Date,
        floating_nominal: f64,
        fixed_dates: Vec<Date>,
        fixed_rate: f64,
        fixed_nominal: f64,
    ) -> ProductResult<Self> {
        check_opposite_nominals(floating_nominal, fixed_nominal)?;
        if end_date <= start_date {
            return Err(ProductError::invalid_product(format!(
                "swap end {end_date} is not after start {start_date}"
            )));
        }
        if fixed_dates.len() < 2 {
            return Err(ProductError::invalid_product(
                "fixed leg needs at least one period",
            ));
        }

        Ok(Self {
            start_date,
            end_date,
            floating_nominal,
            fixed_dates,
            fixed_rate,
            fixed_nominal,
        })
    }

    /// Creates a standard swap starting on `start_date`.
    ///
    /// The fixed leg pays every `fixed_tenor_months` months (12 is the
    /// market convention) with a short final period if needed.
    pub fn standard(
        start_date: Date,
        maturity_months: u32,
        fixed_tenor_months: u32,
        fixed_rate: f64,
        nominal: f64,
        swap_type: SwapType,
    ) -> ProductResult<Self> {
        let months = i32::try_from(maturity_months)
            .map_err(|_| ProductError::invalid_product("maturity out of range"))?;
        let end_date = start_date.add_months(months)?;
        let fixed_dates = generate_schedule(start_date, end_date, fixed_tenor_months)?;
        let (floating_nominal, fixed_nominal) = swap_type.leg_nominals(nominal);

        Self::new(
            start_date,
            end_date,
            floating_nominal,
            fixed_dates,
            fixed_rate,
            fixed_nominal,
        )
    }

    /// Accrual start.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Final payment date.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Fixed coupon rate.
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Fixed leg period boundaries.
    pub fn fixed_dates(&self) -> &[Date] {
        &self.fixed_dates
    }

    /// Receiver or payer, judged from the fixed leg nominal.
    pub fn swap_type(&self) -> SwapType {
        if self.fixed_nominal >= 0.0 {
            SwapType::Receiver
        } else {
            SwapType::Payer
        }
    }

    /// Value of the overnight leg.
    pub fn floating_leg_npv(&self, curve: &DiscountCurve) -> f64 {
        let leg = curve.discount_factor(self.start_date) - curve.discount_factor(self.end_date);
        leg * self.floating_nominal
    }

    /// Value of the fixed leg.
    pub fn fixed_leg_npv(&self, curve: &DiscountCurve) -> f64 {
        self.annuity(curve) * self.fixed_rate * self.fixed_nominal
    }

    /// Sum of `df * tau` over the fixed periods, for unit nominal.
    pub fn annuity(&self, curve: &DiscountCurve) -> f64 {
        self.fixed_dates
            .windows(2)
            .map(|p| curve.discount_factor(p[1]) * Act360.year_fraction(p[0], p[1]))
            .sum()
    }

    /// Fixed rate that makes the swap worth zero.
    pub fn par_rate(&self, curve: &DiscountCurve) -> f64 {
        (curve.discount_factor(self.start_date) - curve.discount_factor(self.end_date))
            / self.annuity(curve)
    }

    /// Net present value: sum of both legs with their signs.
    pub fn npv(&self, curve: &DiscountCurve) -> f64 {
        self.fixed_leg_npv(curve) + self.floating_leg_npv(curve)
    }
}

impl BootstrapInstrument<DiscountCurve> for OvernightIndexSwap {
    fn end_date(&self) -> Date {
        self.end_date
    }

    fn npv(&self, curve: &DiscountCurve) -> f64 {
        OvernightIndexSwap::npv(self, curve)
    }

    fn description(&self) -> String {
        format!(
            "OIS {} {} {:.4}%",
            self.swap_type(),
            self.end_date,
            self.fixed_rate * 100.0
        )
    }
}
