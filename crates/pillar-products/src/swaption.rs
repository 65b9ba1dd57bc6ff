//! European swaptions under Black's model.

use std::f64::consts::SQRT_2;

use pillar_core::daycounts::{Act365Fixed, DayCount};
use pillar_core::Date;
use pillar_curves::{Curve, DiscountCurve, ForwardRateCurve};
use statrs::function::erf::erfc;

use crate::error::{ProductError, ProductResult};
use crate::swap::Swap;

/// Standard normal cumulative distribution function.
fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// The right to enter a swap at expiry.
///
/// Priced with Black's formula on the forward swap rate, with the annuity in
/// place of the discount factor:
///
/// ```text
/// S = |floating leg| / A,   A = |fixed leg / K|
/// V = A * w * (S * N(w * d1) - K * N(w * d2))
/// ```
///
/// where `w` is +1 for a payer swaption and -1 for a receiver, and the time
/// to expiry is ACT/365F from the discount curve's observation date.
#[derive(Debug, Clone, PartialEq)]
pub struct Swaption {
    swap: Swap,
    expiry: Date,
    parity: f64,
}

impl Swaption {
    /// Creates a swaption on `swap` expiring on `expiry`.
    ///
    /// Only the part of `swap` alive after expiry is kept.
    ///
    /// # Errors
    ///
    /// `NoRemainingPeriods` if the swap has ended by `expiry`.
    pub fn new(swap: &Swap, expiry: Date) -> ProductResult<Self> {
        let swap = swap.forward_from(expiry)?;
        let parity = if swap.floating_nominal() < 0.0 { -1.0 } else { 1.0 };
        Ok(Self {
            swap,
            expiry,
            parity,
        })
    }

    /// The underlying forward swap.
    pub fn swap(&self) -> &Swap {
        &self.swap
    }

    /// Expiry date.
    pub fn expiry(&self) -> Date {
        self.expiry
    }

    /// True for a payer swaption (right to pay fixed).
    pub fn is_payer(&self) -> bool {
        self.parity > 0.0
    }

    /// Forward swap rate and annuity, the latter scaled by the fixed nominal.
    pub fn forward_swap_rate(
        &self,
        discount: &DiscountCurve,
        forward: &ForwardRateCurve,
    ) -> ProductResult<(f64, f64)> {
        let annuity = self.swap.annuity(discount) * self.swap.fixed_nominal().abs();
        if annuity <= 0.0 {
            return Err(ProductError::pricing_failed("underlying swap has no annuity"));
        }
        let rate = self.swap.floating_leg_npv(discount, forward).abs() / annuity;
        Ok((rate, annuity))
    }

    /// Black price with lognormal volatility `vol`.
    ///
    /// An expired option, or one with zero volatility, is worth its
    /// intrinsic value.
    ///
    /// # Errors
    ///
    /// `PricingFailed` if the forward swap rate or the strike is not
    /// positive, or `vol` is negative.
    pub fn npv(&self, discount: &DiscountCurve, forward: &ForwardRateCurve, vol: f64) -> ProductResult<f64> {
        let (swap_rate, annuity) = self.forward_swap_rate(discount, forward)?;
        let strike = self.swap.fixed_rate();
        if swap_rate <= 0.0 || strike <= 0.0 {
            return Err(ProductError::pricing_failed(format!(
                "Black formula needs positive rates: swap rate {swap_rate}, strike {strike}"
            )));
        }
        if vol < 0.0 {
            return Err(ProductError::pricing_failed(format!("negative volatility {vol}")));
        }

        let w = self.parity;
        let time = Act365Fixed.year_fraction(discount.observation_date(), self.expiry);
        if time <= 0.0 || vol == 0.0 {
            return Ok(annuity * (w * (swap_rate - strike)).max(0.0));
        }

        let std_dev = vol * time.sqrt();
        let d1 = ((swap_rate / strike).ln() + 0.5 * std_dev * std_dev) / std_dev;
        let d2 = d1 - std_dev;

        Ok(annuity * w * (swap_rate * norm_cdf(w * d1) - strike * norm_cdf(w * d2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ois::SwapType;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn market() -> (DiscountCurve, ForwardRateCurve) {
        let today = date(2010, 1, 1);
        let discount = DiscountCurve::new(
            today,
            vec![date(2011, 1, 1), date(2012, 1, 1)],
            vec![0.95, 0.95],
        )
        .unwrap();
        let forward = ForwardRateCurve::flat(today, 0.05).unwrap();
        (discount, forward)
    }

    #[test]
    fn test_norm_cdf() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.959_963_984_540_054), 0.975, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0) + norm_cdf(1.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_put_call_parity() {
        let (discount, forward) = market();
        let start = date(2010, 1, 1);
        let expiry = date(2011, 1, 1);
        let strike = 0.050_694_444_444_45;

        let receiver = Swap::standard(start, 24, 6, 12, strike, 1.0, SwapType::Receiver).unwrap();
        let payer = Swap::standard(start, 24, 6, 12, strike, 1.0, SwapType::Payer).unwrap();
        let rec = Swaption::new(&receiver, expiry).unwrap();
        let pay = Swaption::new(&payer, expiry).unwrap();

        assert!(pay.is_payer());
        assert!(!rec.is_payer());

        let (rate, annuity) = pay.forward_swap_rate(&discount, &forward).unwrap();
        let diff = pay.npv(&discount, &forward, 0.2).unwrap() - rec.npv(&discount, &forward, 0.2).unwrap();
        assert_relative_eq!(diff, annuity * (rate - strike), epsilon = 1e-14);
    }

    #[test]
    fn test_zero_vol_is_intrinsic() {
        let (discount, forward) = market();
        let swap = Swap::standard(date(2010, 1, 1), 24, 6, 12, 0.03, 1.0, SwapType::Payer).unwrap();
        let option = Swaption::new(&swap, date(2011, 1, 1)).unwrap();

        let (rate, annuity) = option.forward_swap_rate(&discount, &forward).unwrap();
        let price = option.npv(&discount, &forward, 0.0).unwrap();
        assert_relative_eq!(price, annuity * (rate - 0.03), epsilon = 1e-15);
    }

    #[test]
    fn test_price_increases_with_vol() {
        let (discount, forward) = market();
        let swap = Swap::standard(date(2010, 1, 1), 24, 6, 12, 0.05, 1.0, SwapType::Receiver).unwrap();
        let option = Swaption::new(&swap, date(2011, 1, 1)).unwrap();

        let low = option.npv(&discount, &forward, 0.1).unwrap();
        let high = option.npv(&discount, &forward, 0.3).unwrap();
        assert!(low > 0.0);
        assert!(high > low);
    }
}
