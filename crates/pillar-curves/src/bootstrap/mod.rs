//! Sequential curve bootstrapping.
//!
//! A [`CurveBootstrapper`] takes instruments in strictly increasing maturity
//! order and solves one pillar per instrument, left to right. Each solve
//! treats every earlier pillar as fixed and searches the newest pillar
//! value with Brent's method over a fixed bracket, using a
//! [`PillarObjective`] that rebuilds a fresh curve for every trial value.
//!
//! ```text
//!   add_instrument        add_instrument          run            result
//! Empty ─────────▶ Accumulating ◀──────┐ ───────────▶ Solved ───────────▶ &C
//!                        │             │
//!                        └─────────────┘      (any error) ──▶ Failed
//! ```

mod config;
mod driver;
mod objective;
mod repricing;

pub use config::{BootstrapConfig, DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
pub use driver::{BootstrapPhase, CurveBootstrapper};
pub use objective::PillarObjective;
pub use repricing::{RepricingCheck, RepricingReport};
