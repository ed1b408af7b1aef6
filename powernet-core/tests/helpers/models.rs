use crate::models::{DemandClass, Network};

/// Creates a network from generator and house definitions, houses are connected when
/// a generator name is given.
pub fn create_network(generators: &[(&str, i64)], houses: &[(&str, DemandClass, Option<&str>)]) -> Network {
    let mut network = Network::default();

    generators.iter().for_each(|(name, capacity)| {
        network.upsert_generator(name, *capacity).unwrap();
    });

    houses.iter().for_each(|(name, class, _)| {
        network.upsert_house(name, *class);
    });

    houses.iter().filter_map(|(name, _, generator)| generator.map(|generator| (name, generator))).for_each(
        |(name, generator)| {
            network.set_assignment(name, generator).unwrap();
        },
    );

    network
}

/// Creates scenario with two equal generators and three houses: one high and two medium.
pub fn create_balanced_network(connections: [Option<&str>; 3]) -> Network {
    create_network(
        &[("A", 50), ("B", 50)],
        &[
            ("h1", DemandClass::High, connections[0]),
            ("h2", DemandClass::Medium, connections[1]),
            ("h3", DemandClass::Medium, connections[2]),
        ],
    )
}

/// Creates a network with single generator which cannot feed its single house.
pub fn create_overloaded_network() -> Network {
    create_network(&[("A", 30)], &[("h1", DemandClass::High, Some("A"))])
}

/// Returns connections as sorted pairs of house and generator.
pub fn get_connections(network: &Network) -> Vec<(String, String)> {
    let mut connections = network
        .assignment()
        .iter()
        .map(|(house, generator)| (house.clone(), generator.clone()))
        .collect::<Vec<_>>();
    connections.sort();

    connections
}
