#[cfg(test)]
#[path = "../../tests/unit/solver/construction_test.rs"]
mod construction_test;

use crate::models::{Cost, Network, evaluate};
use crate::utils::{Float, GenericResult, Random, compare_floats};
use std::cmp::Ordering;

/// Builds a new assignment from scratch using randomized greedy construction and returns its cost.
///
/// Houses are placed by descending demand (ties by name): large consumers constrain capacity the
/// most. Each house goes to a generator drawn uniformly from the restricted candidate list: all
/// generators whose tentative cost is within `alpha` of the cost range above the best one.
pub fn construct_greedy_randomized(
    network: &mut Network,
    lambda: i64,
    alpha: Float,
    random: &dyn Random,
) -> GenericResult<Cost> {
    if network.generators().is_empty() {
        return Err("cannot construct assignment: network has no generators".into());
    }

    let houses = get_houses_by_demand(network);
    let generators = get_generator_names(network);

    network.clear_assignments();

    for house in houses.iter() {
        let mut candidates = Vec::with_capacity(generators.len());
        for generator in generators.iter() {
            network.set_assignment(house, generator)?;
            candidates.push((generator.as_str(), evaluate(network, lambda).total));
            network.clear_assignment(house);
        }

        let generator = select_candidate(candidates.as_slice(), alpha, random)
            .ok_or_else(|| format!("cannot select generator for house '{house}'"))?;
        network.set_assignment(house, generator)?;
    }

    Ok(evaluate(network, lambda))
}

/// Returns house names ordered by descending demand, ties are broken by name.
pub(crate) fn get_houses_by_demand(network: &Network) -> Vec<String> {
    let mut houses = network.houses().iter().collect::<Vec<_>>();
    houses.sort_by(|a, b| b.demand().cmp(&a.demand()).then_with(|| a.name.cmp(&b.name)));

    houses.into_iter().map(|house| house.name.clone()).collect()
}

/// Returns generator names ordered by name.
pub(crate) fn get_generator_names(network: &Network) -> Vec<String> {
    let mut generators = network.generators().iter().map(|generator| generator.name.clone()).collect::<Vec<_>>();
    generators.sort();

    generators
}

/// Selects a generator from the restricted candidate list.
fn select_candidate<'a>(candidates: &[(&'a str, Float)], alpha: Float, random: &dyn Random) -> Option<&'a str> {
    // NOTE min_by keeps the first minimum, candidates are ordered by name
    let (best, min_cost) = candidates.iter().copied().min_by(|(_, a), (_, b)| compare_floats(*a, *b))?;

    if alpha <= 0. {
        return Some(best);
    }

    let max_cost = candidates.iter().map(|(_, cost)| *cost).max_by(|a, b| compare_floats(*a, *b)).unwrap_or(min_cost);
    let threshold = if alpha >= 1. { max_cost } else { min_cost + alpha * (max_cost - min_cost) };

    let rcl = candidates
        .iter()
        .filter(|(_, cost)| compare_floats(*cost, threshold) != Ordering::Greater)
        .map(|(generator, _)| *generator)
        .collect::<Vec<_>>();

    match rcl.len() {
        0 => Some(best),
        1 => rcl.first().copied(),
        size => rcl.get(random.uniform_int(0, size as i32 - 1) as usize).copied(),
    }
}
