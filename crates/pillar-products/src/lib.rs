//! # Pillar Products
//!
//! Rates and credit products priced off Pillar curves.
//!
//! This crate provides:
//!
//! - **Rates**: [`OvernightIndexSwap`], a single-curve [`Swap`] with a
//!   forward-rate floating leg, and a Black [`Swaption`]
//! - **Credit**: [`CreditDefaultSwap`] with a day-stepped default leg, plus
//!   fixed and floating coupon bonds carrying issuer risk
//! - **Calibration**: helpers that feed OIS and CDS quotes through the
//!   generic bootstrap in `pillar-curves`
//!
//! ## Example
//!
//! ```rust
//! use pillar_core::Date;
//! use pillar_products::prelude::*;
//!
//! let today = Date::from_ymd(2010, 1, 1).unwrap();
//! let quotes = [OisQuote::new(12, 0.02), OisQuote::new(24, 0.025)];
//! let curve = bootstrap_discount_curve(today, &quotes, BootstrapConfig::default()).unwrap();
//!
//! let df = curve.discount_factor(Date::from_ymd(2011, 1, 1).unwrap());
//! assert!((df - 1.0 / (1.0 + 0.02 * 365.0 / 360.0)).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_arguments)]

pub mod bond;
pub mod calibration;
pub mod cds;
pub mod error;
pub mod ois;
pub mod swap;
pub mod swaption;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::{FixedCouponBond, FloatingCouponBond};
    pub use crate::calibration::{
        bootstrap_credit_curve, bootstrap_discount_curve, calibrate_credit_curve,
        calibrate_discount_curve, CdsQuote, OisQuote,
    };
    pub use crate::cds::{CdsParQuote, CdsSide, CreditDefaultSwap};
    pub use crate::error::{ProductError, ProductResult};
    pub use crate::ois::{OvernightIndexSwap, SwapType};
    pub use crate::swap::Swap;
    pub use crate::swaption::Swaption;
    pub use pillar_curves::prelude::*;
}

pub use error::{ProductError, ProductResult};
