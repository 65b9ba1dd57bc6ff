//! # Pillar Core
//!
//! Calendar primitives shared by every Pillar crate.
//!
//! - **Types**: [`Date`], a day-resolution calendar date, and [`Frequency`]
//! - **Day Count Conventions**: ACT/360, ACT/365F and 30E/360 year fractions
//! - **Schedules**: regular period generation and CDS roll dates
//!
//! ## Example
//!
//! ```rust
//! use pillar_core::prelude::*;
//!
//! let start = Date::from_ymd(2010, 1, 1).unwrap();
//! let end = start.add_months(12).unwrap();
//! let tau = Act360.year_fraction(start, end);
//! assert!((tau - 365.0 / 360.0).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount, DayCountConvention, Thirty360E};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::schedule::{generate_schedule, next_cds_roll_date};
    pub use crate::types::{Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};
