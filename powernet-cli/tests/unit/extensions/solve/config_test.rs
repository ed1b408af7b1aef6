use super::*;
use std::fs::File;

fn read_config_from_str(data: &str) -> Result<Config, String> {
    read_config(BufReader::new(data.as_bytes()))
}

#[test]
fn can_read_full_config() {
    let file = File::open("../data/config/config.full.json").expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    let grasp = config.grasp.clone().expect("no grasp config");
    assert_eq!(grasp.lambda, Some(10));
    assert_eq!(grasp.restarts, Some(20));
    assert_eq!(grasp.alpha, Some(0.3));
    assert_eq!(grasp.max_passes, Some(50));

    let environment = config.environment.clone().expect("no environment config");
    assert_eq!(environment.seed, Some(42));
    assert_eq!(environment.parallelism, Some(2));

    assert!(!config.is_logging_enabled());
}

#[test]
fn can_create_defaults_from_empty_config() {
    let config = read_config_from_str("{}").unwrap();

    let grasp_config = create_grasp_config(&config).unwrap();
    let environment = create_environment(&config);

    assert_eq!(grasp_config, GraspConfig::default());
    assert_eq!(environment.seed, None);
    assert_eq!(environment.parallelism, 1);
}

#[test]
fn can_fill_missing_parameters_with_defaults() {
    let config = read_config_from_str(r#"{ "grasp": { "restarts": 7, "maxPasses": 3 } }"#).unwrap();

    let grasp_config = create_grasp_config(&config).unwrap();

    assert_eq!(grasp_config, GraspConfig::default().with_restarts(7).with_max_passes(3));
}

#[test]
fn can_use_all_cpus_when_parallelism_is_zero() {
    let config = read_config_from_str(r#"{ "environment": { "parallelism": 0 } }"#).unwrap();

    assert_eq!(create_environment(&config).parallelism, get_cpus().max(1));
}

#[test]
fn can_enable_logging() {
    let mut config = read_config_from_str(r#"{ "telemetry": { "logging": { "enabled": false } } }"#).unwrap();
    assert!(!config.is_logging_enabled());

    config.set_logging(true);

    assert!(config.is_logging_enabled());
}

parameterized_test! {can_reject_invalid_grasp_parameters, data, {
    let config = read_config_from_str(data).unwrap();

    assert!(create_grasp_config(&config).is_err());
}}

can_reject_invalid_grasp_parameters! {
    case_01_alpha_above: r#"{ "grasp": { "alpha": 2.0 } }"#,
    case_02_alpha_below: r#"{ "grasp": { "alpha": -0.5 } }"#,
    case_03_zero_restarts: r#"{ "grasp": { "restarts": 0 } }"#,
    case_04_negative_lambda: r#"{ "grasp": { "lambda": -3 } }"#,
}

#[test]
fn can_reject_malformed_config() {
    assert!(read_config_from_str(r#"{ "grasp": { "restarts": "many" } }"#).is_err());
    assert!(read_config_from_str("not a json").is_err());
}

#[test]
fn can_create_solver_parameters_from_config_file() {
    let file = File::open("../data/config/config.grasp.json").expect("cannot read config from file");
    let config = read_config(BufReader::new(file)).unwrap();

    let (grasp_config, environment) = (create_grasp_config(&config).unwrap(), create_environment(&config));

    assert_eq!(grasp_config.restarts, 5);
    assert_eq!(grasp_config.alpha, 1.);
    assert_eq!(environment.parallelism, 1);
}
