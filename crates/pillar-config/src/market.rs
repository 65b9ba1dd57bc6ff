//! Market data for a curve build.

use std::path::Path;

use pillar_core::Date;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::solver::SolverSettings;

/// Longest quote maturity accepted, in months.
pub const MAX_MATURITY_MONTHS: u32 = 1200;

/// A par OIS quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OisQuote {
    /// Maturity in months from the observation date.
    pub maturity_months: u32,

    /// Fixed leg payment interval in months.
    #[serde(default = "default_fixed_tenor_months")]
    pub fixed_tenor_months: u32,

    /// Par fixed rate.
    pub rate: f64,
}

fn default_fixed_tenor_months() -> u32 {
    12
}

/// A par CDS spread quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdsQuote {
    /// Maturity in months, before rolling to the next CDS date.
    pub maturity_months: u32,

    /// Par running spread.
    pub spread: f64,
}

/// CDS quotes for one reference name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdsMarket {
    /// Recovery rate assumed for every quote.
    #[serde(default = "default_recovery")]
    pub recovery: f64,

    /// Quotes in increasing maturity order.
    pub quotes: Vec<CdsQuote>,
}

fn default_recovery() -> f64 {
    0.4
}

/// Everything needed to build the discount and credit curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Date the curves are anchored on.
    pub observation_date: Date,

    /// Root-finder settings.
    #[serde(default)]
    pub solver: SolverSettings,

    /// OIS quotes in increasing maturity order.
    #[serde(default)]
    pub ois: Vec<OisQuote>,

    /// Optional CDS quotes.
    #[serde(default)]
    pub cds: Option<CdsMarket>,
}

impl MarketConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Returns the CDS market, or an error naming the missing section.
    pub fn require_cds(&self) -> ConfigResult<&CdsMarket> {
        self.cds.as_ref().ok_or_else(|| ConfigError::Validation {
            field: "cds".into(),
            message: "A [cds] section is required for credit curves".into(),
        })
    }
}

fn check_maturity(months: u32) -> Option<ValidationError> {
    if months == 0 {
        Some(ValidationError::new("maturity_months", "Maturity must be positive"))
    } else if months > MAX_MATURITY_MONTHS {
        Some(ValidationError::with_rule(
            "maturity_months",
            format!("Maturity {months} exceeds {MAX_MATURITY_MONTHS} months"),
            "max_maturity",
        ))
    } else {
        None
    }
}

/// Reports maturities that do not strictly increase.
fn check_increasing(field: &str, maturities: impl Iterator<Item = u32>) -> Option<ValidationError> {
    let mut previous = None;
    for (i, months) in maturities.enumerate() {
        if previous.is_some_and(|p| months <= p) {
            return Some(ValidationError::with_rule(
                format!("{field}[{i}].maturity_months"),
                "Maturities must be strictly increasing",
                "ordered_maturities",
            ));
        }
        previous = Some(months);
    }
    None
}

impl Validate for OisQuote {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<_> = check_maturity(self.maturity_months).into_iter().collect();
        if self.fixed_tenor_months == 0 {
            errors.push(ValidationError::new(
                "fixed_tenor_months",
                "Fixed tenor must be positive",
            ));
        }
        if !self.rate.is_finite() {
            errors.push(ValidationError::new("rate", "Rate must be finite"));
        }
        errors
    }
}

impl Validate for CdsQuote {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<_> = check_maturity(self.maturity_months).into_iter().collect();
        if !(self.spread.is_finite() && self.spread > 0.0) {
            errors.push(ValidationError::new("spread", "Spread must be positive and finite"));
        }
        errors
    }
}

impl Validate for CdsMarket {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(0.0..1.0).contains(&self.recovery) {
            errors.push(ValidationError::with_rule(
                "recovery",
                "Recovery must lie in [0, 1)",
                "valid_recovery",
            ));
        }
        if self.quotes.is_empty() {
            errors.push(ValidationError::new("quotes", "At least one CDS quote is required"));
        }
        for (i, quote) in self.quotes.iter().enumerate() {
            errors.extend(quote.validate().into_iter().map(|e| e.nested(format!("quotes[{i}]"))));
        }
        errors.extend(check_increasing("quotes", self.quotes.iter().map(|q| q.maturity_months)));

        errors
    }
}

impl Validate for MarketConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<_> = self
            .solver
            .validate()
            .into_iter()
            .map(|e| e.nested("solver"))
            .collect();

        if self.ois.is_empty() {
            errors.push(ValidationError::new("ois", "At least one OIS quote is required"));
        }
        for (i, quote) in self.ois.iter().enumerate() {
            errors.extend(quote.validate().into_iter().map(|e| e.nested(format!("ois[{i}]"))));
        }
        errors.extend(check_increasing("ois", self.ois.iter().map(|q| q.maturity_months)));

        if let Some(cds) = &self.cds {
            errors.extend(cds.validate().into_iter().map(|e| e.nested("cds")));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        observation_date = "2010-01-01"

        [solver]
        tolerance = 1e-10

        [[ois]]
        maturity_months = 6
        rate = 0.03

        [[ois]]
        maturity_months = 24
        fixed_tenor_months = 6
        rate = 0.05

        [cds]
        recovery = 0.35
        quotes = [
            { maturity_months = 12, spread = 0.01 },
            { maturity_months = 36, spread = 0.014 },
        ]
    "#;

    #[test]
    fn test_parse_sample() {
        let config = MarketConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.observation_date, Date::from_ymd(2010, 1, 1).unwrap());
        assert_eq!(config.solver.tolerance, 1e-10);
        assert_eq!(config.solver.upper_bound, 2.0);
        assert_eq!(config.ois.len(), 2);
        assert_eq!(config.ois[0].fixed_tenor_months, 12);
        assert_eq!(config.ois[1].fixed_tenor_months, 6);

        let cds = config.require_cds().unwrap();
        assert_eq!(cds.recovery, 0.35);
        assert_eq!(cds.quotes[1].spread, 0.014);
    }

    #[test]
    fn test_missing_cds_section() {
        let config = MarketConfig::from_toml_str(
            r#"
            observation_date = "2010-01-01"
            [[ois]]
            maturity_months = 12
            rate = 0.02
            "#,
        )
        .unwrap();
        assert!(config.cds.is_none());
        assert!(config.require_cds().is_err());
    }

    #[test]
    fn test_unordered_quotes_are_reported() {
        let err = MarketConfig::from_toml_str(
            r#"
            observation_date = "2010-01-01"
            [[ois]]
            maturity_months = 24
            rate = 0.02
            [[ois]]
            maturity_months = 12
            rate = 0.02
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Validation { field, .. } => assert_eq!(field, "ois[1].maturity_months"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_every_problem_is_collected() {
        let config = MarketConfig {
            observation_date: Date::from_ymd(2010, 1, 1).unwrap(),
            solver: SolverSettings::default(),
            ois: vec![],
            cds: Some(CdsMarket {
                recovery: 1.2,
                quotes: vec![CdsQuote {
                    maturity_months: 12,
                    spread: -0.01,
                }],
            }),
        };

        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["ois", "cds.recovery", "cds.quotes[0].spread"]);
    }

    #[test]
    fn test_maturity_upper_bound() {
        let quote = OisQuote {
            maturity_months: MAX_MATURITY_MONTHS,
            fixed_tenor_months: 12,
            rate: 0.02,
        };
        assert!(quote.validate().is_empty());

        let too_long = OisQuote {
            maturity_months: i32::MAX as u32,
            ..quote
        };
        let errors = too_long.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "maturity_months");
        assert_eq!(errors[0].rule.as_deref(), Some("max_maturity"));

        let cds = CdsQuote {
            maturity_months: MAX_MATURITY_MONTHS + 1,
            spread: 0.01,
        };
        assert_eq!(cds.validate()[0].field, "maturity_months");
    }

    #[test]
    fn test_bad_toml_is_deserialization_error() {
        let err = MarketConfig::from_toml_str("observation_date = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }
}
