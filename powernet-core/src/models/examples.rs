//! Provides small networks which demonstrate the model and are used by benchmarks.

use crate::models::{DemandClass, Network};
use crate::utils::GenericResult;

/// Creates a network with two generators of equal capacity and three unassigned houses.
/// The best assignment puts the high demand house alone on one generator.
pub fn create_example_network() -> GenericResult<Network> {
    let mut network = Network::default();

    network.upsert_generator("A", 50)?;
    network.upsert_generator("B", 50)?;
    network.upsert_house("h1", DemandClass::High);
    network.upsert_house("h2", DemandClass::Medium);
    network.upsert_house("h3", DemandClass::Medium);

    Ok(network)
}

/// Creates a network with given amount of generators and houses. Capacities and demand classes
/// cycle through a fixed pattern, total capacity exceeds total demand.
pub fn create_sized_network(generators: usize, houses: usize) -> GenericResult<Network> {
    const CAPACITIES: [i64; 4] = [60, 80, 100, 120];

    let mut network = Network::default();

    let demand = houses as i64 * DemandClass::High.demand();
    let per_generator = demand / generators.max(1) as i64 + 1;

    (0..generators).try_for_each(|idx| {
        let capacity = CAPACITIES[idx % CAPACITIES.len()].max(per_generator);
        network.upsert_generator(format!("G{idx}").as_str(), capacity).map(|_| ())
    })?;

    (0..houses).for_each(|idx| {
        network.upsert_house(format!("H{idx}").as_str(), DemandClass::ALL[idx % DemandClass::ALL.len()]);
    });

    Ok(network)
}
