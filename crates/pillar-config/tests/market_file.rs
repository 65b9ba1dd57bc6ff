//! Loading market files from disk.

use std::io::Write;

use pillar_config::{ConfigError, MarketConfig, SolverSettings};
use proptest::prelude::*;
use tempfile::NamedTempFile;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_file() {
    let file = write_file(
        r#"
        observation_date = "2012-06-15"

        [[ois]]
        maturity_months = 3
        fixed_tenor_months = 3
        rate = 0.001

        [[ois]]
        maturity_months = 120
        rate = 0.021
        "#,
    );

    let config = MarketConfig::from_file(file.path()).unwrap();
    assert_eq!(config.observation_date.to_string(), "2012-06-15");
    assert_eq!(config.solver, SolverSettings::default());
    assert_eq!(config.ois[1].maturity_months, 120);
}

#[test]
fn test_missing_file_names_the_path() {
    let err = MarketConfig::from_file("/nonexistent/market.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/market.toml"));
}

#[test]
fn test_invalid_solver_section_is_nested() {
    let file = write_file(
        r#"
        observation_date = "2012-06-15"
        [solver]
        max_iterations = 0
        [[ois]]
        maturity_months = 12
        rate = 0.01
        "#,
    );

    match MarketConfig::from_file(file.path()).unwrap_err() {
        ConfigError::Validation { field, .. } => assert_eq!(field, "solver.max_iterations"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_several_problems_are_reported_together() {
    let file = write_file(
        r#"
        observation_date = "2012-06-15"
        [[ois]]
        maturity_months = 0
        fixed_tenor_months = 0
        rate = 0.01
        "#,
    );

    match MarketConfig::from_file(file.path()).unwrap_err() {
        ConfigError::MultipleValidationErrors(errors) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, ["ois[0].maturity_months", "ois[0].fixed_tenor_months"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

proptest! {
    #[test]
    fn prop_increasing_maturities_are_accepted(
        steps in prop::collection::vec(1u32..24, 1..10),
        rate in -0.01f64..0.1,
    ) {
        let mut content = String::from("observation_date = \"2010-01-01\"\n");
        let mut months = 0;
        for step in steps {
            months += step;
            content.push_str(&format!(
                "[[ois]]\nmaturity_months = {months}\nrate = {rate}\n"
            ));
        }
        prop_assert!(MarketConfig::from_toml_str(&content).is_ok());
    }
}
