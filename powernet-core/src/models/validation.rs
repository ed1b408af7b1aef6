#[cfg(test)]
#[path = "../../tests/unit/models/validation_test.rs"]
mod validation_test;

use crate::models::Network;
use std::fmt::{Display, Formatter};

/// Specifies a feasibility violation found in the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Network has no houses.
    NoHouses,
    /// Network has no generators.
    NoGenerators,
    /// House has no connection.
    UnassignedHouse(String),
    /// Connection references a house which is not defined.
    UnknownHouse {
        /// House name.
        house: String,
        /// Generator name.
        generator: String,
    },
    /// Connection references a generator which is not defined.
    UnknownGenerator {
        /// House name.
        house: String,
        /// Generator name.
        generator: String,
    },
    /// Total demand is higher than total capacity.
    DemandExceedsCapacity {
        /// Total demand in kW.
        demand: i64,
        /// Total capacity in kW.
        capacity: i64,
    },
}

impl Violation {
    /// Returns true if violation makes cost evaluation impossible.
    pub fn is_hard(&self) -> bool {
        matches!(self, Violation::NoHouses | Violation::NoGenerators)
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::NoHouses => write!(f, "network has no houses"),
            Violation::NoGenerators => write!(f, "network has no generators"),
            Violation::UnassignedHouse(house) => write!(f, "house '{house}' has no connection"),
            Violation::UnknownHouse { house, generator } => {
                write!(f, "connection '{house}' -> '{generator}' references unknown house")
            }
            Violation::UnknownGenerator { house, generator } => {
                write!(f, "connection '{house}' -> '{generator}' references unknown generator")
            }
            Violation::DemandExceedsCapacity { demand, capacity } => {
                write!(f, "total demand {demand} kW exceeds total capacity {capacity} kW")
            }
        }
    }
}

/// Keeps all violations found by [`validate`] in the order of checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Found violations.
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Returns true if no violation is found.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if cost can be evaluated and optimizer can run on the network.
    pub fn is_evaluable(&self) -> bool {
        !self.violations.iter().any(Violation::is_hard)
    }
}

/// Checks network feasibility accumulating all violations. The result is advisory: only
/// missing houses or generators prevent evaluation.
pub fn validate(network: &Network) -> ValidationResult {
    let mut violations = vec![];

    let has_houses = !network.houses().is_empty();
    let has_generators = !network.generators().is_empty();

    if !has_houses {
        violations.push(Violation::NoHouses);
    }

    if !has_generators {
        violations.push(Violation::NoGenerators);
    }

    if has_houses && has_generators {
        violations.extend(
            network
                .houses()
                .iter()
                .filter(|house| network.generator_of(&house.name).is_none())
                .map(|house| Violation::UnassignedHouse(house.name.clone())),
        );
    }

    let mut connections = network.assignment().iter().collect::<Vec<_>>();
    connections.sort();
    connections.into_iter().for_each(|(house, generator)| {
        let (house, generator) = (house.clone(), generator.clone());
        if network.house(&house).is_none() {
            violations.push(Violation::UnknownHouse { house, generator });
        } else if network.generator(&generator).is_none() {
            violations.push(Violation::UnknownGenerator { house, generator });
        }
    });

    let (demand, capacity) = (network.total_demand(), network.total_capacity());
    if demand > capacity {
        violations.push(Violation::DemandExceedsCapacity { demand, capacity });
    }

    ValidationResult { violations }
}
