//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        strategy = "brute_force"
        environment_mode = "fast_assert"
        brute_force_limit = 9

        [termination]
        step_count_limit = 500
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.strategy, Strategy::BruteForce);
    assert_eq!(config.environment_mode, EnvironmentMode::FastAssert);
    assert_eq!(config.brute_force_limit, 9);
    assert_eq!(config.step_count_limit(), Some(500));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        strategy: hungarian
        environment_mode: full_assert
        termination:
          step_count_limit: 42
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.strategy, Strategy::Hungarian);
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.brute_force_limit, DEFAULT_BRUTE_FORCE_LIMIT);
    assert_eq!(config.step_count_limit(), Some(42));
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.strategy, Strategy::Hungarian);
    assert_eq!(config.environment_mode, EnvironmentMode::Production);
    assert_eq!(config.step_count_limit(), None);
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_strategy(Strategy::BruteForce)
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_brute_force_limit(6)
        .with_step_count_limit(1000);

    assert_eq!(config.strategy, Strategy::BruteForce);
    assert_eq!(config.brute_force_limit, 6);
    assert_eq!(config.step_count_limit(), Some(1000));
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_out_of_range_brute_force_limit() {
    let err = SolverConfig::from_toml_str("brute_force_limit = 13").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = SolverConfig::from_toml_str("brute_force_limit = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_zero_step_limit() {
    let toml = r#"
        [termination]
        step_count_limit = 0
    "#;
    let err = SolverConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_unknown_strategy() {
    let err = SolverConfig::from_toml_str(r#"strategy = "auction""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SolverConfig::load("does/not/exist/solver.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_environment_mode_levels() {
    assert!(!EnvironmentMode::Production.asserts_result());
    assert!(EnvironmentMode::FastAssert.asserts_result());
    assert!(!EnvironmentMode::FastAssert.asserts_steps());
    assert!(EnvironmentMode::FullAssert.asserts_steps());
}
