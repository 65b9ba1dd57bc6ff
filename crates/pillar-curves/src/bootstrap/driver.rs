//! The bootstrap driver.

use std::cell::RefCell;
use std::fmt;

use pillar_core::Date;
use pillar_math::solvers::{brent_with_endpoints, SolverResult};
use pillar_math::MathError;

use super::config::BootstrapConfig;
use super::objective::PillarObjective;
use super::repricing::{RepricingCheck, RepricingReport};
use crate::curves::Curve;
use crate::error::{CurveError, CurveResult};
use crate::instrument::BootstrapInstrument;

/// Lifecycle phase of a [`CurveBootstrapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// No instruments added yet.
    Empty,
    /// At least one instrument added; not yet run.
    Accumulating,
    /// Every pillar solved; the curve is available.
    Solved,
    /// `run` failed. Terminal.
    Failed,
}

impl fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "Empty",
            Self::Accumulating => "Accumulating",
            Self::Solved => "Solved",
            Self::Failed => "Failed",
        };
        f.write_str(name)
    }
}

/// Builds a curve of type `C` one pillar per instrument.
///
/// Instruments are added in strictly increasing end-date order. `run` then
/// solves them left to right: each instrument's end date becomes a pillar
/// whose value is found with Brent's method over the configured bracket,
/// holding every earlier pillar fixed. The first pillar is the observation
/// date with value 1.0.
///
/// # Example
///
/// ```rust,ignore
/// let mut bootstrapper = CurveBootstrapper::<DiscountCurve>::new(today);
/// for swap in swaps {
///     bootstrapper.add_instrument(swap)?;
/// }
/// bootstrapper.run()?;
/// let curve = bootstrapper.into_curve()?;
/// ```
pub struct CurveBootstrapper<C: Curve> {
    observation_date: Date,
    instruments: Vec<Box<dyn BootstrapInstrument<C>>>,
    config: BootstrapConfig,
    phase: BootstrapPhase,
    curve: Option<C>,
}

impl<C: Curve> CurveBootstrapper<C> {
    /// Creates an empty bootstrapper with the default configuration.
    #[must_use]
    pub fn new(observation_date: Date) -> Self {
        Self {
            observation_date,
            instruments: Vec::new(),
            config: BootstrapConfig::default(),
            phase: BootstrapPhase::Empty,
            curve: None,
        }
    }

    /// Sets the bootstrap configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// The observation date the curve is anchored on.
    pub fn observation_date(&self) -> Date {
        self.observation_date
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    /// The configuration in use.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Number of instruments added.
    pub fn instrument_count(&self) -> usize {
        self.instruments.len()
    }

    /// Appends an instrument.
    ///
    /// # Errors
    ///
    /// - `InvalidState` after `run` has been called
    /// - `InvalidCurveInput` if the instrument ends on or before the
    ///   observation date
    /// - `UnorderedInstrument` if it does not end strictly after the last
    ///   instrument added
    pub fn add_instrument<I>(&mut self, instrument: I) -> CurveResult<()>
    where
        I: BootstrapInstrument<C> + 'static,
    {
        if !matches!(self.phase, BootstrapPhase::Empty | BootstrapPhase::Accumulating) {
            return Err(CurveError::invalid_state("add an instrument", self.phase));
        }

        let end_date = instrument.end_date();
        if end_date <= self.observation_date {
            return Err(CurveError::invalid_input(format!(
                "instrument '{}' ends on {end_date}, not after observation date {}",
                instrument.description(),
                self.observation_date
            )));
        }
        if let Some(last) = self.instruments.last() {
            let last_end_date = last.end_date();
            if end_date <= last_end_date {
                return Err(CurveError::UnorderedInstrument {
                    instrument: instrument.description(),
                    end_date,
                    last_end_date,
                });
            }
        }

        self.instruments.push(Box::new(instrument));
        self.phase = BootstrapPhase::Accumulating;
        Ok(())
    }

    /// Solves every pillar.
    ///
    /// On failure the bootstrapper moves to [`BootstrapPhase::Failed`] and
    /// the error names the instrument that could not be fitted.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless instruments have been added and `run` has not
    ///   been called yet
    /// - `InvalidConfig` if the configuration fails validation
    /// - `RootNotBracketed` when the objective has no sign change over the
    ///   bracket, including when either endpoint value is not finite
    /// - `RootFindDidNotConverge` when the iteration budget runs out
    pub fn run(&mut self) -> CurveResult<()> {
        if self.phase != BootstrapPhase::Accumulating {
            return Err(CurveError::invalid_state("run", self.phase));
        }

        match self.solve() {
            Ok(curve) => {
                self.curve = Some(curve);
                self.phase = BootstrapPhase::Solved;
                Ok(())
            }
            Err(e) => {
                self.phase = BootstrapPhase::Failed;
                Err(e)
            }
        }
    }

    /// The solved curve.
    ///
    /// # Errors
    ///
    /// `InvalidState` unless the bootstrap has been run successfully.
    pub fn result(&self) -> CurveResult<&C> {
        match (&self.curve, self.phase) {
            (Some(curve), BootstrapPhase::Solved) => Ok(curve),
            _ => Err(CurveError::invalid_state("read the result", self.phase)),
        }
    }

    /// Consumes the bootstrapper and returns the solved curve.
    ///
    /// # Errors
    ///
    /// `InvalidState` unless the bootstrap has been run successfully.
    pub fn into_curve(self) -> CurveResult<C> {
        match (self.curve, self.phase) {
            (Some(curve), BootstrapPhase::Solved) => Ok(curve),
            (_, phase) => Err(CurveError::invalid_state("read the result", phase)),
        }
    }

    /// Reprices every instrument on the solved curve.
    ///
    /// # Errors
    ///
    /// `InvalidState` unless the bootstrap has been run successfully.
    pub fn repricing_report(&self, tolerance: f64) -> CurveResult<RepricingReport> {
        let curve = self.result()?;
        let checks = self
            .instruments
            .iter()
            .map(|instrument| RepricingCheck::from_instrument(instrument.as_ref(), curve, tolerance))
            .collect();
        Ok(RepricingReport::new(checks))
    }

    fn solve(&self) -> CurveResult<C> {
        self.config.validate()?;

        let mut dates = Vec::with_capacity(self.instruments.len() + 1);
        let mut values = Vec::with_capacity(self.instruments.len() + 1);
        dates.push(self.observation_date);
        values.push(1.0);

        for instrument in &self.instruments {
            let pillar_date = instrument.end_date();
            let objective =
                PillarObjective::new(self.observation_date, &dates, &values, instrument.as_ref());
            let solved = self.solve_pillar(&objective, instrument.as_ref())?;

            tracing::debug!(
                instrument = %instrument.description(),
                pillar = %pillar_date,
                value = solved.root,
                iterations = solved.iterations,
                residual = solved.residual,
                "Solved pillar"
            );

            dates.push(pillar_date);
            values.push(solved.root);
        }

        let curve = C::from_pillars(self.observation_date, dates, values)?;
        tracing::info!(
            observation_date = %self.observation_date,
            pillars = self.instruments.len(),
            "Bootstrap complete"
        );
        Ok(curve)
    }

    fn solve_pillar(
        &self,
        objective: &PillarObjective<'_, C>,
        instrument: &dyn BootstrapInstrument<C>,
    ) -> CurveResult<SolverResult> {
        let lower = self.config.lower_bound;
        let upper = self.config.upper_bound;
        let (f_lower, f_upper) = evaluate_endpoints(objective, lower, upper);
        let (f_lower, f_upper) = (f_lower?, f_upper?);

        // A NaN or infinite endpoint cannot certify a sign change either.
        let bracketed = f_lower.is_finite() && f_upper.is_finite() && f_lower * f_upper <= 0.0;
        if !bracketed {
            tracing::warn!(
                instrument = %instrument.description(),
                pillar = %objective.pillar_date(),
                f_lower,
                f_upper,
                "Root not bracketed"
            );
            return Err(CurveError::RootNotBracketed {
                instrument: instrument.description(),
                pillar: objective.pillar_date(),
                lower,
                upper,
                f_lower,
                f_upper,
            });
        }

        // First curve construction error seen inside the solver, if any.
        let failure: RefCell<Option<CurveError>> = RefCell::new(None);
        let f = |trial: f64| match objective.evaluate(trial) {
            Ok(value) => value,
            Err(e) => {
                let mut slot = failure.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                f64::NAN
            }
        };

        let outcome = brent_with_endpoints(
            f,
            (lower, f_lower),
            (upper, f_upper),
            &self.config.solver(),
        );
        if let Some(e) = failure.into_inner() {
            return Err(e);
        }

        outcome.map_err(|e| match e {
            MathError::InvalidBracket { fa, fb, .. } => CurveError::RootNotBracketed {
                instrument: instrument.description(),
                pillar: objective.pillar_date(),
                lower,
                upper,
                f_lower: fa,
                f_upper: fb,
            },
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => CurveError::RootFindDidNotConverge {
                instrument: instrument.description(),
                pillar: objective.pillar_date(),
                iterations,
                residual,
            },
            other => CurveError::Math(other),
        })
    }
}

impl<C: Curve> fmt::Debug for CurveBootstrapper<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveBootstrapper")
            .field("observation_date", &self.observation_date)
            .field("instruments", &self.instruments.len())
            .field("config", &self.config)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "parallel")]
fn evaluate_endpoints<C: Curve>(
    objective: &PillarObjective<'_, C>,
    lower: f64,
    upper: f64,
) -> (CurveResult<f64>, CurveResult<f64>) {
    rayon::join(|| objective.evaluate(lower), || objective.evaluate(upper))
}

#[cfg(not(feature = "parallel"))]
fn evaluate_endpoints<C: Curve>(
    objective: &PillarObjective<'_, C>,
    lower: f64,
    upper: f64,
) -> (CurveResult<f64>, CurveResult<f64>) {
    (objective.evaluate(lower), objective.evaluate(upper))
}
