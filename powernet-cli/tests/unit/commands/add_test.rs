use super::*;
use crate::helpers::*;

fn run_add_generator_with_buffer(path: &str, name: &str, capacity: &str) -> (Result<(), String>, String) {
    let buffer = SharedBuffer::default();
    let matches = get_add_generator_app().try_get_matches_from(vec!["add-generator", path, name, capacity]).unwrap();

    let result = run_add_generator(&matches, create_buffer_writer(&buffer));

    (result, buffer.content())
}

fn run_add_house_with_buffer(path: &str, name: &str, class: &str) -> (Result<(), String>, String) {
    let buffer = SharedBuffer::default();
    let matches = get_add_house_app().try_get_matches_from(vec!["add-house", path, name, class]).unwrap();

    let result = run_add_house(&matches, create_buffer_writer(&buffer));

    (result, buffer.content())
}

#[test]
fn can_add_new_generator() {
    let (result, content) = run_add_generator_with_buffer(BALANCED_FACTS_PATH, "C", "70");

    assert_eq!(result, Ok(()));
    let network = content.read_facts().unwrap();
    assert_eq!(network.generators().len(), 3);
    assert_eq!(network.generator("C").map(|generator| generator.capacity), Some(70));
}

#[test]
fn can_update_existing_generator_keeping_connections() {
    let (result, content) = run_add_generator_with_buffer(CONNECTED_FACTS_PATH, "A", "200");

    assert_eq!(result, Ok(()));
    let network = content.read_facts().unwrap();
    assert_eq!(network.generators().len(), 3);
    assert_eq!(network.generator("A").map(|generator| generator.capacity), Some(200));
    assert_eq!(network.assignment().len(), 4);
}

parameterized_test! {can_reject_invalid_capacity, capacity, {
    let (result, content) = run_add_generator_with_buffer(BALANCED_FACTS_PATH, "C", capacity);

    assert!(result.is_err());
    assert!(content.is_empty());
}}

can_reject_invalid_capacity! {
    case_01_zero: "0",
    case_02_negative: "-10",
    case_03_non_numeric: "lots",
}

#[test]
fn can_add_new_house() {
    let (result, content) = run_add_house_with_buffer(BALANCED_FACTS_PATH, "h4", "low");

    assert_eq!(result, Ok(()));
    let network = content.read_facts().unwrap();
    assert_eq!(network.houses().len(), 4);
    assert_eq!(network.house("h4").map(|house| house.demand()), Some(10));
}

#[test]
fn can_update_existing_house_keeping_connection() {
    let (result, content) = run_add_house_with_buffer(CONNECTED_FACTS_PATH, "h3", "HIGH");

    assert_eq!(result, Ok(()));
    let network = content.read_facts().unwrap();
    assert_eq!(network.houses().len(), 4);
    assert_eq!(network.house("h3").map(|house| house.demand()), Some(40));
    assert_eq!(network.generator_of("h3"), Some("A"));
}

#[test]
fn can_reject_unknown_demand_class() {
    let (result, content) = run_add_house_with_buffer(BALANCED_FACTS_PATH, "h4", "HUGE");

    assert!(result.is_err_and(|err| err.starts_with("unknown demand class")));
    assert!(content.is_empty());
}
