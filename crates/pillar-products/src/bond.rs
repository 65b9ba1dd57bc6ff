//! Coupon bonds with issuer default risk.
//!
//! Every flow is weighted by the discount factor and the issuer's survival
//! probability at its payment date. On default the holder recovers
//! `recovery * nominal`, valued with the same day-stepped default density
//! as the CDS default leg. Only flows paid after the discount curve's
//! observation date are counted.

use pillar_core::daycounts::{Act360, DayCount};
use pillar_core::schedule::generate_schedule;
use pillar_core::{Date, Frequency};
use pillar_curves::{CreditCurve, Curve, DiscountCurve, ForwardRateCurve};
use serde::{Deserialize, Serialize};

use crate::cds::discounted_default_probability;
use crate::error::{ProductError, ProductResult};

/// A fixed coupon bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCouponBond {
    nominal: f64,
    coupon: f64,
    recovery: f64,
    schedule: Vec<Date>,
}

impl FixedCouponBond {
    /// Creates a bond paying `coupon` at `frequency` from `start_date` to
    /// `end_date`, accruing on ACT/360.
    ///
    /// # Errors
    ///
    /// `InvalidProduct` if `recovery` is outside `[0, 1]`, or a core error
    /// if the schedule cannot be generated.
    pub fn new(
        nominal: f64,
        start_date: Date,
        end_date: Date,
        frequency: Frequency,
        coupon: f64,
        recovery: f64,
    ) -> ProductResult<Self> {
        check_recovery(recovery)?;
        let schedule = generate_schedule(start_date, end_date, frequency.months_per_period())?;
        Ok(Self {
            nominal,
            coupon,
            recovery,
            schedule,
        })
    }

    /// Coupon period boundaries.
    pub fn schedule(&self) -> &[Date] {
        &self.schedule
    }

    /// Maturity date.
    pub fn maturity(&self) -> Date {
        self.schedule[self.schedule.len() - 1]
    }

    /// Present value including the recovery on default.
    pub fn npv(&self, discount: &DiscountCurve, credit: &CreditCurve) -> f64 {
        let today = discount.observation_date();
        let coupons: f64 = self
            .schedule
            .windows(2)
            .filter(|p| p[1] > today)
            .map(|p| self.coupon * Act360.year_fraction(p[0], p[1]) * risky_df(discount, credit, p[1]))
            .sum();

        self.nominal
            * (coupons
                + principal(discount, credit, self.maturity())
                + self.recovery_leg(discount, credit))
    }

    fn recovery_leg(&self, discount: &DiscountCurve, credit: &CreditCurve) -> f64 {
        recovery_leg(discount, credit, self.schedule[0], self.maturity(), self.recovery)
    }
}

/// A floating coupon bond paying a forward rate plus a margin.
///
/// The period in progress on the observation date pays the already fixed
/// `current_coupon`; later periods pay the forward rate at their start plus
/// `margin`. Coupons accrue on ACT/360 and the payment frequency equals the
/// index tenor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingCouponBond {
    nominal: f64,
    current_coupon: f64,
    margin: f64,
    recovery: f64,
    schedule: Vec<Date>,
}

impl FloatingCouponBond {
    /// Creates a floating bond with coupons every `tenor_months`.
    ///
    /// # Errors
    ///
    /// `InvalidProduct` if `recovery` is outside `[0, 1]`, or a core error
    /// if the schedule cannot be generated.
    pub fn new(
        nominal: f64,
        start_date: Date,
        end_date: Date,
        tenor_months: u32,
        current_coupon: f64,
        margin: f64,
        recovery: f64,
    ) -> ProductResult<Self> {
        check_recovery(recovery)?;
        let schedule = generate_schedule(start_date, end_date, tenor_months)?;
        Ok(Self {
            nominal,
            current_coupon,
            margin,
            recovery,
            schedule,
        })
    }

    /// Coupon period boundaries.
    pub fn schedule(&self) -> &[Date] {
        &self.schedule
    }

    /// Maturity date.
    pub fn maturity(&self) -> Date {
        self.schedule[self.schedule.len() - 1]
    }

    /// Coupon rate of the period `[start, end)`.
    fn period_rate(&self, forward: &ForwardRateCurve, today: Date, start: Date) -> f64 {
        if start <= today {
            self.current_coupon
        } else {
            forward.rate_at(start) + self.margin
        }
    }

    /// Present value including the recovery on default.
    pub fn npv(&self, discount: &DiscountCurve, forward: &ForwardRateCurve, credit: &CreditCurve) -> f64 {
        let today = discount.observation_date();
        let coupons: f64 = self
            .schedule
            .windows(2)
            .filter(|p| p[1] > today)
            .map(|p| {
                let rate = self.period_rate(forward, today, p[0]);
                rate * Act360.year_fraction(p[0], p[1]) * risky_df(discount, credit, p[1])
            })
            .sum();

        let recovery = recovery_leg(
            discount,
            credit,
            self.schedule[0],
            self.maturity(),
            self.recovery,
        );
        self.nominal * (coupons + principal(discount, credit, self.maturity()) + recovery)
    }
}

fn check_recovery(recovery: f64) -> ProductResult<()> {
    if !(0.0..=1.0).contains(&recovery) {
        return Err(ProductError::invalid_product(format!(
            "recovery {recovery} must lie in [0, 1]"
        )));
    }
    Ok(())
}

fn risky_df(discount: &DiscountCurve, credit: &CreditCurve, date: Date) -> f64 {
    discount.discount_factor(date) * credit.survival_probability(date)
}

fn principal(discount: &DiscountCurve, credit: &CreditCurve, maturity: Date) -> f64 {
    if maturity > discount.observation_date() {
        risky_df(discount, credit, maturity)
    } else {
        0.0
    }
}

fn recovery_leg(discount: &DiscountCurve, credit: &CreditCurve, start: Date, maturity: Date, recovery: f64) -> f64 {
    let from = start.max(discount.observation_date());
    recovery * discounted_default_probability(discount, credit, from, maturity)
}
