use super::*;

#[test]
fn can_reproduce_values_with_same_seed() {
    let first = DefaultRandom::new_with_seed(42);
    let second = DefaultRandom::new_with_seed(42);

    let first = (0..20).map(|_| first.uniform_int(0, 100)).collect::<Vec<_>>();
    let second = (0..20).map(|_| second.uniform_int(0, 100)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn can_produce_int_values_in_closed_range() {
    let random = DefaultRandom::new_with_seed(0);

    let values = (0..200).map(|_| random.uniform_int(-1, 1)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (-1..=1).contains(value)));
    assert!(values.contains(&-1));
    assert!(values.contains(&1));
}

#[test]
fn can_return_bound_for_degenerate_range() {
    let random = DefaultRandom::new_with_seed(0);

    assert_eq!(random.uniform_int(5, 5), 5);
}

#[test]
fn can_derive_independent_seeds() {
    let random = DefaultRandom::new_with_seed(7);

    let seeds = (0..10).map(|_| random.next_seed()).collect::<std::collections::HashSet<_>>();

    assert_eq!(seeds.len(), 10);
}
