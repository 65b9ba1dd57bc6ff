//! Pillar Configuration Layer
//!
//! Market data and solver settings for a curve build, read from TOML.
//!
//! # Example
//!
//! ```rust
//! use pillar_config::{MarketConfig, Validate};
//!
//! let config = MarketConfig::from_toml_str(r#"
//!     observation_date = "2010-01-01"
//!
//!     [[ois]]
//!     maturity_months = 12
//!     rate = 0.02
//!
//!     [[ois]]
//!     maturity_months = 24
//!     rate = 0.025
//! "#).unwrap();
//!
//! assert_eq!(config.ois[0].fixed_tenor_months, 12);
//! assert_eq!(config.solver.lower_bound, 1e-4);
//! assert!(config.is_valid());
//! ```
//!
//! # File Layout
//!
//! ```toml
//! observation_date = "2010-01-01"
//!
//! [solver]             # optional, every field defaults
//! lower_bound = 1e-4
//! upper_bound = 2.0
//! tolerance = 1e-12
//! max_iterations = 100
//!
//! [[ois]]              # one table per quote, increasing maturity
//! maturity_months = 12
//! fixed_tenor_months = 12
//! rate = 0.02
//!
//! [cds]                # optional
//! recovery = 0.4
//! quotes = [
//!     { maturity_months = 12, spread = 0.010 },
//!     { maturity_months = 60, spread = 0.018 },
//! ]
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod market;
pub mod solver;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use market::{CdsMarket, CdsQuote, MarketConfig, OisQuote, MAX_MATURITY_MONTHS};
pub use solver::SolverSettings;
