//! Fixed-for-floating interest rate swaps.
//!
//! The floating leg reads its rate for each period from a
//! [`ForwardRateCurve`] at the period start and accrues on ACT/360; the
//! fixed leg accrues on 30E/360. Both legs are discounted on a
//! [`DiscountCurve`], and only periods ending after the discount curve's
//! observation date contribute.

use pillar_core::daycounts::{Act360, DayCount, Thirty360E};
use pillar_core::schedule::generate_schedule;
use pillar_core::Date;
use pillar_curves::{Curve, DiscountCurve, ForwardRateCurve};
use serde::{Deserialize, Serialize};

use crate::error::{check_opposite_nominals, ProductError, ProductResult};
use crate::ois::SwapType;

/// A fixed-for-floating swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    floating_dates: Vec<Date>,
    floating_nominal: f64,
    fixed_dates: Vec<Date>,
    fixed_rate: f64,
    fixed_nominal: f64,
}

impl Swap {
    /// Creates a swap from its period boundaries.
    ///
    /// # Errors
    ///
    /// - `SameSignNominals` if both legs are received or both paid
    /// - `InvalidProduct` if a leg has no period or its dates are not
    ///   strictly increasing
    pub fn new(
        floating_dates: Vec<Date>,
        floating_nominal: f64,
        fixed_dates: Vec<Date>,
        fixed_rate: f64,
        fixed_nominal: f64,
    ) -> ProductResult<Self> {
        check_opposite_nominals(floating_nominal, fixed_nominal)?;
        check_leg("floating", &floating_dates)?;
        check_leg("fixed", &fixed_dates)?;

        Ok(Self {
            floating_dates,
            floating_nominal,
            fixed_dates,
            fixed_rate,
            fixed_nominal,
        })
    }

    /// Creates a spot-starting swap with regular schedules on both legs.
    pub fn standard(
        start_date: Date,
        maturity_months: u32,
        floating_tenor_months: u32,
        fixed_tenor_months: u32,
        fixed_rate: f64,
        nominal: f64,
        swap_type: SwapType,
    ) -> ProductResult<Self> {
        let months = i32::try_from(maturity_months)
            .map_err(|_| ProductError::invalid_product("maturity out of range"))?;
        let end_date = start_date.add_months(months)?;
        let floating_dates = generate_schedule(start_date, end_date, floating_tenor_months)?;
        let fixed_dates = generate_schedule(start_date, end_date, fixed_tenor_months)?;
        let (floating_nominal, fixed_nominal) = swap_type.leg_nominals(nominal);

        Self::new(
            floating_dates,
            floating_nominal,
            fixed_dates,
            fixed_rate,
            fixed_nominal,
        )
    }

    /// The swap that remains alive from `date` on.
    ///
    /// Drops every period that ends on or before `date` on both legs. The
    /// period straddling `date`, if any, is kept whole.
    ///
    /// # Errors
    ///
    /// `NoRemainingPeriods` if either leg has ended by `date`.
    pub fn forward_from(&self, date: Date) -> ProductResult<Self> {
        let floating_dates = remaining_dates(&self.floating_dates, date)?;
        let fixed_dates = remaining_dates(&self.fixed_dates, date)?;

        Self::new(
            floating_dates,
            self.floating_nominal,
            fixed_dates,
            self.fixed_rate,
            self.fixed_nominal,
        )
    }

    /// Floating leg period boundaries.
    pub fn floating_dates(&self) -> &[Date] {
        &self.floating_dates
    }

    /// Fixed leg period boundaries.
    pub fn fixed_dates(&self) -> &[Date] {
        &self.fixed_dates
    }

    /// Fixed coupon rate.
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Signed floating leg nominal (positive when received).
    pub fn floating_nominal(&self) -> f64 {
        self.floating_nominal
    }

    /// Signed fixed leg nominal (positive when received).
    pub fn fixed_nominal(&self) -> f64 {
        self.fixed_nominal
    }

    /// Last payment date.
    pub fn end_date(&self) -> Date {
        let floating_end = self.floating_dates[self.floating_dates.len() - 1];
        let fixed_end = self.fixed_dates[self.fixed_dates.len() - 1];
        floating_end.max(fixed_end)
    }

    /// Value of the floating leg.
    pub fn floating_leg_npv(&self, discount: &DiscountCurve, forward: &ForwardRateCurve) -> f64 {
        let today = discount.observation_date();
        let leg: f64 = self
            .floating_dates
            .windows(2)
            .filter(|p| p[1] > today)
            .map(|p| {
                let tau = Act360.year_fraction(p[0], p[1]);
                discount.discount_factor(p[1]) * tau * forward.rate_at(p[0])
            })
            .sum();
        leg * self.floating_nominal
    }

    /// Value of the fixed leg.
    pub fn fixed_leg_npv(&self, discount: &DiscountCurve) -> f64 {
        self.annuity(discount) * self.fixed_rate * self.fixed_nominal
    }

    /// Sum of `df * tau` over the remaining fixed periods, for unit nominal.
    pub fn annuity(&self, discount: &DiscountCurve) -> f64 {
        let today = discount.observation_date();
        self.fixed_dates
            .windows(2)
            .filter(|p| p[1] > today)
            .map(|p| discount.discount_factor(p[1]) * Thirty360E.year_fraction(p[0], p[1]))
            .sum()
    }

    /// Fixed rate that makes the swap worth zero.
    ///
    /// # Errors
    ///
    /// `PricingFailed` if no fixed period remains.
    pub fn par_rate(&self, discount: &DiscountCurve, forward: &ForwardRateCurve) -> ProductResult<f64> {
        let annuity = self.annuity(discount) * self.fixed_nominal.abs();
        if annuity == 0.0 {
            return Err(ProductError::pricing_failed("swap has no remaining fixed periods"));
        }
        Ok(self.floating_leg_npv(discount, forward).abs() / annuity)
    }

    /// Net present value: sum of both legs with their signs.
    pub fn npv(&self, discount: &DiscountCurve, forward: &ForwardRateCurve) -> f64 {
        self.fixed_leg_npv(discount) + self.floating_leg_npv(discount, forward)
    }
}

fn check_leg(name: &str, dates: &[Date]) -> ProductResult<()> {
    if dates.len() < 2 {
        return Err(ProductError::invalid_product(format!(
            "{name} leg needs at least one period"
        )));
    }
    if dates.windows(2).any(|p| p[1] <= p[0]) {
        return Err(ProductError::invalid_product(format!(
            "{name} leg dates must be strictly increasing"
        )));
    }
    Ok(())
}

fn remaining_dates(dates: &[Date], date: Date) -> ProductResult<Vec<Date>> {
    let first_after = dates.partition_point(|d| *d <= date);
    if first_after == dates.len() {
        return Err(ProductError::NoRemainingPeriods { date });
    }
    Ok(dates[first_after.saturating_sub(1)..].to_vec())
}
