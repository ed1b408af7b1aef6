//! Formats structured results of the core operations as human readable text.

#[cfg(test)]
#[path = "../../tests/unit/extensions/report_test.rs"]
mod report_test;

use powernet_core::models::{Cost, Generator, GeneratorLoad, House, Network, ValidationResult};
use powernet_core::solver::SolveResult;

/// Formats cost with its terms.
pub fn format_cost(cost: &Cost) -> String {
    format!("cost: {:.6} (dispersion: {:.6}, overload: {:.6})", cost.total, cost.dispersion, cost.overload)
}

/// Formats per generator loads, one generator per line.
pub fn format_loads(loads: &[GeneratorLoad]) -> String {
    loads
        .iter()
        .map(|load| {
            let status = if load.load > load.capacity { ", overloaded" } else { "" };
            format!(
                "  {}: {}/{} kW ({:.1}%{})",
                load.name,
                load.load,
                load.capacity,
                load.utilization * 100.,
                status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats generators and houses with their connections.
pub fn format_network(network: &Network) -> String {
    let generators = network
        .generators()
        .iter()
        .map(|generator| format!("  {} ({} kW)", generator.name, generator.capacity));

    let houses = network.houses().iter().map(|house| {
        format!(
            "  {} {} ({} kW) -> {}",
            house.name,
            house.class,
            house.demand(),
            network.generator_of(house.name.as_str()).unwrap_or("unassigned")
        )
    });

    std::iter::once(format!("generators: {}", network.generators().len()))
        .chain(generators)
        .chain(std::iter::once(format!("houses: {}", network.houses().len())))
        .chain(houses)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats validation result, one violation per line.
pub fn format_violations(result: &ValidationResult) -> String {
    if result.is_ok() {
        return "network is valid".to_string();
    }

    std::iter::once(format!("found {} violation(s):", result.violations.len()))
        .chain(result.violations.iter().map(|violation| format!("  {violation}")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats solver result followed by per generator loads.
pub fn format_solve_result(result: &SolveResult, loads: &[GeneratorLoad]) -> String {
    let origin = match result.best_restart {
        Some(idx) => format!("restart {} of {}", idx + 1, result.restarts.len()),
        None => "current assignment".to_string(),
    };

    [format!("{} found at {origin} in {}ms", format_cost(&result.cost), result.duration), format_loads(loads)]
        .join("\n")
}

/// Formats a generator redefinition.
pub fn format_generator_update(previous: &Generator, current: &Generator) -> String {
    format!(
        "generator '{}' updated: capacity {} kW replaced by {} kW",
        current.name, previous.capacity, current.capacity
    )
}

/// Formats a house redefinition.
pub fn format_house_update(previous: &House, current: &House) -> String {
    format!("house '{}' updated: demand class {} replaced by {}", current.name, previous.class, current.class)
}

/// Formats houses which lost their connection.
pub fn format_disconnected(houses: &[String]) -> String {
    match houses {
        [] => "no house is disconnected".to_string(),
        houses => format!("disconnected houses: {}", houses.join(", ")),
    }
}
