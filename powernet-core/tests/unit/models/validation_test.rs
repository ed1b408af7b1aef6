use super::*;
use crate::helpers::models::*;
use crate::models::DemandClass;

#[test]
fn can_accept_fully_connected_feasible_network() {
    let network = create_balanced_network([Some("A"), Some("B"), Some("B")]);

    let result = validate(&network);

    assert!(result.is_ok());
    assert!(result.is_evaluable());
}

#[test]
fn can_report_empty_network() {
    let result = validate(&Network::default());

    assert_eq!(result.violations, vec![Violation::NoHouses, Violation::NoGenerators]);
    assert!(!result.is_evaluable());
}

#[test]
fn can_report_no_generators_and_demand_excess() {
    let network = create_network(&[], &[("h1", DemandClass::Low, None)]);

    let result = validate(&network);

    assert_eq!(
        result.violations,
        vec![Violation::NoGenerators, Violation::DemandExceedsCapacity { demand: 10, capacity: 0 }]
    );
    assert!(!result.is_evaluable());
}

#[test]
fn can_report_unassigned_houses() {
    let network = create_balanced_network([Some("A"), None, None]);

    let result = validate(&network);

    assert_eq!(
        result.violations,
        vec![Violation::UnassignedHouse("h2".to_string()), Violation::UnassignedHouse("h3".to_string())]
    );
    assert!(result.is_evaluable());
}

#[test]
fn can_report_demand_exceeding_capacity() {
    let network = create_overloaded_network();

    let result = validate(&network);

    assert_eq!(result.violations, vec![Violation::DemandExceedsCapacity { demand: 40, capacity: 30 }]);
    assert!(!result.is_ok());
    assert!(result.is_evaluable());
}

#[test]
fn can_report_stale_generator_reference() {
    let mut network = create_balanced_network([Some("A"), Some("B"), Some("B")]);
    network.upsert_generator("C", 50).unwrap();
    network.remove_generator("A");

    let result = validate(&network);

    assert_eq!(
        result.violations,
        vec![Violation::UnknownGenerator { house: "h1".to_string(), generator: "A".to_string() }]
    );
}

#[test]
fn can_accumulate_violations_in_check_order() {
    let mut network = create_network(
        &[("A", 10), ("B", 10)],
        &[("h1", DemandClass::High, Some("A")), ("h2", DemandClass::Low, None)],
    );
    network.remove_generator("A");

    let result = validate(&network);

    assert_eq!(
        result.violations,
        vec![
            Violation::UnassignedHouse("h2".to_string()),
            Violation::UnknownGenerator { house: "h1".to_string(), generator: "A".to_string() },
            Violation::DemandExceedsCapacity { demand: 50, capacity: 10 },
        ]
    );
}

#[test]
fn can_format_violations() {
    let messages = [
        Violation::NoHouses,
        Violation::UnassignedHouse("h1".to_string()),
        Violation::DemandExceedsCapacity { demand: 40, capacity: 30 },
    ]
    .iter()
    .map(|violation| violation.to_string())
    .collect::<Vec<_>>();

    assert_eq!(
        messages,
        vec![
            "network has no houses".to_string(),
            "house 'h1' has no connection".to_string(),
            "total demand 40 kW exceeds total capacity 30 kW".to_string(),
        ]
    );
}
