#[cfg(test)]
#[path = "../../tests/unit/solver/local_search_test.rs"]
mod local_search_test;

use super::construction::get_generator_names;
use crate::models::{Network, evaluate};
use crate::utils::GenericResult;

/// Keeps statistics of a local search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalSearchStats {
    /// Amount of passes over all houses.
    pub passes: usize,
    /// Amount of accepted moves.
    pub moves: usize,
}

/// Improves the current assignment by moving single houses to other generators.
///
/// A move is kept only if it strictly decreases the total cost, otherwise it is reverted. Search
/// stops after `max_passes` passes or after the first pass without an accepted move, so the cost
/// of the assignment never increases.
pub fn improve_locally(network: &mut Network, lambda: i64, max_passes: usize) -> GenericResult<LocalSearchStats> {
    let mut houses = network.houses().iter().map(|house| house.name.clone()).collect::<Vec<_>>();
    houses.sort();
    let generators = get_generator_names(network);

    let mut stats = LocalSearchStats::default();
    let mut current_cost = evaluate(network, lambda).total;

    while stats.passes < max_passes {
        let mut is_improved = false;

        for house in houses.iter() {
            let mut assigned = network.generator_of(house).map(|generator| generator.to_string());

            for generator in generators.iter() {
                if assigned.as_ref() == Some(generator) {
                    continue;
                }

                network.set_assignment(house, generator)?;
                let new_cost = evaluate(network, lambda).total;

                if new_cost < current_cost {
                    current_cost = new_cost;
                    assigned = Some(generator.clone());
                    is_improved = true;
                    stats.moves += 1;
                } else {
                    match assigned.as_ref() {
                        Some(previous) => {
                            network.set_assignment(house, previous)?;
                        }
                        None => {
                            network.clear_assignment(house);
                        }
                    }
                }
            }
        }

        stats.passes += 1;

        if !is_improved {
            break;
        }
    }

    Ok(stats)
}
