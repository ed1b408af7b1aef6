#[cfg(test)]
#[path = "../../tests/unit/models/cost_test.rs"]
mod cost_test;

use crate::models::Network;
use crate::utils::Float;

/// A reference value of the overload penalty weight.
pub const DEFAULT_LAMBDA: i64 = 10;

/// Keeps the objective value split into its terms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cost {
    /// L1 deviation of per generator utilization from the mean utilization.
    pub dispersion: Float,
    /// Normalized excess load above capacity, summed across generators.
    pub overload: Float,
    /// `dispersion + lambda * overload`.
    pub total: Float,
}

/// Keeps load details of a single generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorLoad {
    /// Generator name.
    pub name: String,
    /// Sum of demands of assigned houses in kW.
    pub load: i64,
    /// Generator capacity in kW.
    pub capacity: i64,
    /// `load / capacity`, exceeds 1 when generator is overloaded.
    pub utilization: Float,
}

/// Evaluates the cost of the current assignment of the network.
///
/// Runs in O(houses + generators) and has no side effects. The network must have at least one
/// generator: with none, the mean utilization is undefined and the returned cost is meaningless.
pub fn evaluate(network: &Network, lambda: i64) -> Cost {
    let (sum, overload, utilizations) = network.generators().iter().zip(network.loads()).fold(
        (0., 0., Vec::with_capacity(network.generators().len())),
        |(sum, overload, mut utilizations), (generator, load)| {
            let capacity = generator.capacity as Float;
            let utilization = load as Float / capacity;
            utilizations.push(utilization);

            (sum + utilization, overload + (load - generator.capacity).max(0) as Float / capacity, utilizations)
        },
    );

    let mean = sum / utilizations.len() as Float;
    let dispersion = utilizations.iter().map(|utilization| (utilization - mean).abs()).sum::<Float>();

    Cost { dispersion, overload, total: dispersion + lambda as Float * overload }
}

/// Returns load details for every generator of the network.
pub fn generator_loads(network: &Network) -> Vec<GeneratorLoad> {
    network
        .generators()
        .iter()
        .zip(network.loads())
        .map(|(generator, load)| GeneratorLoad {
            name: generator.name.clone(),
            load,
            capacity: generator.capacity,
            utilization: load as Float / generator.capacity as Float,
        })
        .collect()
}
