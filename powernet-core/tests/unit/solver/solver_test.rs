use super::*;
use crate::helpers::models::*;
use crate::models::examples::create_sized_network;
use crate::models::{DEFAULT_LAMBDA, DemandClass, validate};
use std::sync::Mutex;

fn create_solver(config: GraspConfig, seed: u64, parallelism: usize) -> Solver {
    Solver::new(config, Arc::new(Environment::default().with_seed(seed).with_parallelism(parallelism)))
}

fn create_summary(index: usize, total: Float) -> RestartSummary {
    RestartSummary { index, constructed: total, total, search: LocalSearchStats::default() }
}

fn create_restarts(index: usize, total: Float) -> GenericResult<Restarts> {
    let summary = create_summary(index, total);
    let mut assignment = Assignment::default();
    assignment.insert(format!("h{index}"), "A".to_string());

    Ok(Restarts { summaries: vec![summary.clone()], best: Some((summary, assignment)) })
}

#[test]
fn can_find_balanced_assignment() {
    let mut network = create_balanced_network([None, None, None]);

    let result = create_solver(GraspConfig::default().with_restarts(10), 42, 1).solve(&mut network).unwrap();

    assert_eq!(result.cost.total, 0.);
    assert_eq!(result.restarts.len(), 10);
    assert_eq!(result.best_restart, Some(0));
    assert!(validate(&network).is_ok());
    assert_eq!(evaluate(&network, DEFAULT_LAMBDA).total, 0.);
}

#[test]
fn can_solve_network_which_cannot_avoid_overload() {
    let mut network = create_network(&[("A", 30)], &[("h1", DemandClass::High, None)]);

    let result = create_solver(GraspConfig::default().with_restarts(3), 0, 1).solve(&mut network).unwrap();

    assert_eq!(network.generator_of("h1"), Some("A"));
    assert_eq!(result.cost.dispersion, 0.);
    assert_float_eq!(result.cost.overload, 1. / 3.);
    assert_float_eq!(result.cost.total, 10. / 3.);
}

#[test]
fn can_keep_local_search_result_not_worse_than_construction() {
    let mut network = create_sized_network(4, 25).unwrap();

    let config = GraspConfig::default().with_restarts(5).with_alpha(1.);

    let result = create_solver(config, 7, 1).solve(&mut network).unwrap();

    assert!(result.restarts.iter().all(|summary| summary.total <= summary.constructed));
    let best = result.restarts.iter().map(|summary| summary.total).fold(Float::INFINITY, Float::min);
    assert_eq!(result.cost.total, best);
    assert_eq!(result.restarts[result.best_restart.unwrap()].total, best);
}

#[test]
fn can_produce_same_result_with_same_seed() {
    let config = GraspConfig::default().with_restarts(8).with_alpha(0.6);
    let mut first = create_sized_network(5, 40).unwrap();
    let mut second = create_sized_network(5, 40).unwrap();

    let first_result = create_solver(config.clone(), 11, 1).solve(&mut first).unwrap();
    let second_result = create_solver(config, 11, 1).solve(&mut second).unwrap();

    assert_eq!(first_result.restarts, second_result.restarts);
    assert_eq!(first_result.cost, second_result.cost);
    assert_eq!(get_connections(&first), get_connections(&second));
}

#[test]
fn can_produce_same_result_in_parallel() {
    let config = GraspConfig::default().with_restarts(12).with_alpha(0.8);
    let mut sequential = create_sized_network(6, 50).unwrap();
    let mut parallel = create_sized_network(6, 50).unwrap();

    let sequential_result = create_solver(config.clone(), 5, 1).solve(&mut sequential).unwrap();
    let parallel_result = create_solver(config, 5, 4).solve(&mut parallel).unwrap();

    assert_eq!(sequential_result.restarts, parallel_result.restarts);
    assert_eq!(sequential_result.best_restart, parallel_result.best_restart);
    assert_eq!(get_connections(&sequential), get_connections(&parallel));
}

#[test]
fn can_run_solver_on_solved_network_without_making_it_worse() {
    let mut network = create_sized_network(3, 20).unwrap();
    let first = create_solver(GraspConfig::default().with_restarts(5), 1, 1).solve(&mut network).unwrap();

    let config = GraspConfig::default().with_restarts(1).with_alpha(0.);
    let second = create_solver(config, 2, 1).solve(&mut network).unwrap();

    assert!(second.cost.total <= first.cost.total);
}

#[test]
fn can_keep_current_assignment_when_no_restart_is_better() {
    let mut network = create_balanced_network([Some("B"), Some("A"), Some("A")]);

    let result = create_solver(GraspConfig::default().with_restarts(3), 0, 1).solve(&mut network).unwrap();

    assert_eq!(result.best_restart, None);
    assert_eq!(result.cost.total, 0.);
    assert_eq!(network.generator_of("h1"), Some("B"));
}

#[test]
fn can_replace_worse_current_assignment() {
    let mut network = create_balanced_network([Some("A"), Some("A"), Some("A")]);

    let result = create_solver(GraspConfig::default().with_restarts(2), 0, 1).solve(&mut network).unwrap();

    assert_eq!(result.best_restart, Some(0));
    assert_eq!(result.cost.total, 0.);
}

#[test]
fn can_ignore_assignment_with_stale_connections() {
    let mut network = create_balanced_network([Some("A"), Some("B"), Some("B")]);
    network.upsert_generator("C", 50).unwrap();
    network.set_assignment("h1", "C").unwrap();
    network.remove_generator("C");

    let result = create_solver(GraspConfig::default().with_restarts(2), 0, 1).solve(&mut network).unwrap();

    assert!(result.best_restart.is_some());
    assert!(validate(&network).is_ok());
}

#[test]
fn can_fail_without_generators_and_keep_network() {
    let mut network = create_network(&[], &[("h1", DemandClass::Low, None)]);

    let result = create_solver(GraspConfig::default(), 0, 1).solve(&mut network);

    assert!(result.is_err());
    assert_eq!(network.houses().len(), 1);
    assert!(network.assignment().is_empty());
}

#[test]
fn can_fail_with_invalid_config_and_keep_network() {
    let mut network = create_balanced_network([Some("A"), Some("A"), Some("A")]);

    let result = create_solver(GraspConfig::default().with_alpha(1.5), 0, 1).solve(&mut network);

    assert!(result.is_err());
    assert_eq!(get_connections(&network).iter().filter(|(_, generator)| generator == "A").count(), 3);
}

#[test]
fn can_log_solver_progress() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |message: &str| messages.lock().unwrap().push(message.to_string()))
    };
    let environment = Arc::new(Environment::default().with_seed(3).with_logger(logger));
    let mut network = create_balanced_network([None, None, None]);

    Solver::new(GraspConfig::default().with_restarts(2), environment).solve(&mut network).unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.first().is_some_and(|message| message.starts_with("configured to use restarts: 2")));
    assert!(messages.iter().any(|message| message.starts_with("[restart 1]")));
    assert!(messages.last().is_some_and(|message| message.contains("found at restart 1")));
}

parameterized_test! {can_merge_restarts_keeping_first_best, (left_total, right_total, expected_index), {
    let merged = merge_restarts(create_restarts(0, left_total), create_restarts(1, right_total)).unwrap();

    let (best, assignment) = merged.best.unwrap();
    assert_eq!(best.index, expected_index);
    assert!(assignment.contains_key(format!("h{expected_index}").as_str()));
    assert_eq!(merged.summaries.iter().map(|summary| summary.index).collect::<Vec<_>>(), vec![0, 1]);
}}

can_merge_restarts_keeping_first_best! {
    case_01_left_better: (0.5, 1., 0),
    case_02_equal: (1., 1., 0),
    case_03_right_better: (1., 0.5, 1),
}

#[test]
fn can_merge_restarts_with_empty_default() {
    let merged = merge_restarts(Ok(Restarts::default()), create_restarts(3, 2.)).unwrap();

    assert_eq!(merged.best.map(|(summary, _)| summary.index), Some(3));
}

#[test]
fn can_propagate_restart_error_on_merge() {
    let result = merge_restarts(create_restarts(0, 1.), Err("failed".into()));

    assert!(result.is_err());
}
