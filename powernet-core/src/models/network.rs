#[cfg(test)]
#[path = "../../tests/unit/models/network_test.rs"]
mod network_test;

use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies a mapping from house name to the name of the generator which feeds it.
pub type Assignment = FxHashMap<String, String>;

/// Represents a demand class of a house. Demand is derived solely from the class.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DemandClass {
    /// Low consumption: 10 kW.
    Low,
    /// Medium consumption: 20 kW.
    Medium,
    /// High consumption: 40 kW.
    High,
}

impl DemandClass {
    /// All known demand classes.
    pub const ALL: [DemandClass; 3] = [DemandClass::Low, DemandClass::Medium, DemandClass::High];

    /// Returns demand in kW.
    pub fn demand(&self) -> i64 {
        match self {
            DemandClass::Low => 10,
            DemandClass::Medium => 20,
            DemandClass::High => 40,
        }
    }

    /// Returns the upper-case name used in text formats.
    pub fn name(&self) -> &'static str {
        match self {
            DemandClass::Low => "LOW",
            DemandClass::Medium => "MEDIUM",
            DemandClass::High => "HIGH",
        }
    }
}

impl FromStr for DemandClass {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().find(|class| class.name().eq_ignore_ascii_case(value.trim())).copied().ok_or_else(|| {
            format!("unknown demand class: '{value}', expected one of: LOW, MEDIUM, HIGH").into()
        })
    }
}

impl Display for DemandClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents an electricity producing unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    /// Unique name.
    pub name: String,
    /// Maximum production capacity in kW, always positive.
    pub capacity: i64,
}

/// Represents an electricity consuming unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct House {
    /// Unique name.
    pub name: String,
    /// Demand class.
    pub class: DemandClass,
}

impl House {
    /// Returns demand in kW.
    pub fn demand(&self) -> i64 {
        self.class.demand()
    }
}

/// Describes what happened when a house was connected manually.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectOutcome {
    /// A generator the house was connected to before.
    pub previous: Option<String>,
    /// Load of the target generator after connection.
    pub load: i64,
    /// Capacity of the target generator.
    pub capacity: i64,
}

impl ConnectOutcome {
    /// Returns true if the target generator is loaded above its capacity.
    pub fn is_overloaded(&self) -> bool {
        self.load > self.capacity
    }
}

/// A registry of generators, houses and the current house to generator assignment.
///
/// Mutation does not enforce capacity: transient overload and partial assignment are allowed,
/// feasibility is checked by [`validate`](crate::models::validate).
#[derive(Clone, Debug, Default)]
pub struct Network {
    generators: Vec<Generator>,
    generator_index: FxHashMap<String, usize>,
    houses: Vec<House>,
    house_index: FxHashMap<String, usize>,
    assignment: Assignment,
}

impl Network {
    /// Inserts a generator or overwrites capacity of the existing one. Returns replaced generator.
    pub fn upsert_generator(&mut self, name: &str, capacity: i64) -> GenericResult<Option<Generator>> {
        if capacity <= 0 {
            return Err(format!("generator '{name}' must have positive capacity, got {capacity}").into());
        }

        let generator = Generator { name: name.to_string(), capacity };

        Ok(match self.generator_index.get(name) {
            Some(&idx) => Some(std::mem::replace(&mut self.generators[idx], generator)),
            None => {
                self.generator_index.insert(name.to_string(), self.generators.len());
                self.generators.push(generator);
                None
            }
        })
    }

    /// Inserts a house or overwrites demand class of the existing one. Returns replaced house.
    pub fn upsert_house(&mut self, name: &str, class: DemandClass) -> Option<House> {
        let house = House { name: name.to_string(), class };

        match self.house_index.get(name) {
            Some(&idx) => Some(std::mem::replace(&mut self.houses[idx], house)),
            None => {
                self.house_index.insert(name.to_string(), self.houses.len());
                self.houses.push(house);
                None
            }
        }
    }

    /// Removes a house together with its connection.
    pub fn remove_house(&mut self, name: &str) -> Option<House> {
        let idx = self.house_index.remove(name)?;
        let house = self.houses.swap_remove(idx);
        if let Some(moved) = self.houses.get(idx) {
            self.house_index.insert(moved.name.clone(), idx);
        }
        self.assignment.remove(name);

        Some(house)
    }

    /// Removes a generator. Connections to it are kept and become stale until houses are reassigned.
    pub fn remove_generator(&mut self, name: &str) -> Option<Generator> {
        let idx = self.generator_index.remove(name)?;
        let generator = self.generators.swap_remove(idx);
        if let Some(moved) = self.generators.get(idx) {
            self.generator_index.insert(moved.name.clone(), idx);
        }

        Some(generator)
    }

    /// Assigns house to generator replacing any prior assignment, returns the previous generator.
    /// No capacity checks are performed.
    pub fn set_assignment(&mut self, house: &str, generator: &str) -> GenericResult<Option<String>> {
        if !self.house_index.contains_key(house) {
            return Err(format!("unknown entity: house '{house}' is not defined").into());
        }

        if !self.generator_index.contains_key(generator) {
            return Err(format!("unknown entity: generator '{generator}' is not defined").into());
        }

        Ok(self.assignment.insert(house.to_string(), generator.to_string()))
    }

    /// Removes assignment of the house if present.
    pub fn clear_assignment(&mut self, house: &str) -> Option<String> {
        self.assignment.remove(house)
    }

    /// Removes all assignments.
    pub fn clear_assignments(&mut self) {
        self.assignment.clear();
    }

    /// Replaces the whole assignment, returns the previous one. Every entry has to reference
    /// existing house and generator, otherwise the network is left untouched.
    pub fn replace_assignment(&mut self, assignment: Assignment) -> GenericResult<Assignment> {
        if let Some((house, generator)) = assignment.iter().find(|(house, generator)| {
            !self.house_index.contains_key(house.as_str()) || !self.generator_index.contains_key(generator.as_str())
        }) {
            return Err(format!("unknown entity in assignment: '{house}' -> '{generator}'").into());
        }

        Ok(std::mem::replace(&mut self.assignment, assignment))
    }

    /// Connects house to generator and reports resulting load of the generator, so the caller
    /// can warn about overload.
    pub fn connect(&mut self, house: &str, generator: &str) -> GenericResult<ConnectOutcome> {
        let previous = self.set_assignment(house, generator)?;
        let capacity = self.generator(generator).map_or(0, |generator| generator.capacity);

        Ok(ConnectOutcome { previous, load: self.current_load(generator), capacity })
    }

    /// Returns sum of demand over all houses currently assigned to the generator.
    pub fn current_load(&self, generator: &str) -> i64 {
        self.assignment
            .iter()
            .filter(|(_, assigned)| assigned.as_str() == generator)
            .filter_map(|(house, _)| self.house(house))
            .map(|house| house.demand())
            .sum()
    }

    /// Returns loads of all generators in the order of [`generators`](Self::generators).
    /// Connections which reference unknown entities are ignored.
    pub fn loads(&self) -> Vec<i64> {
        let mut loads = vec![0; self.generators.len()];

        self.assignment.iter().for_each(|(house, generator)| {
            if let (Some(house), Some(&idx)) = (self.house(house), self.generator_index.get(generator)) {
                loads[idx] += house.demand();
            }
        });

        loads
    }

    /// Returns all generators.
    pub fn generators(&self) -> &[Generator] {
        self.generators.as_slice()
    }

    /// Returns all houses.
    pub fn houses(&self) -> &[House] {
        self.houses.as_slice()
    }

    /// Returns current assignment.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Returns generator by its name.
    pub fn generator(&self, name: &str) -> Option<&Generator> {
        self.generator_index.get(name).map(|&idx| &self.generators[idx])
    }

    /// Returns house by its name.
    pub fn house(&self, name: &str) -> Option<&House> {
        self.house_index.get(name).map(|&idx| &self.houses[idx])
    }

    /// Returns name of the generator assigned to the house.
    pub fn generator_of(&self, house: &str) -> Option<&str> {
        self.assignment.get(house).map(|generator| generator.as_str())
    }

    /// Returns total demand of all houses.
    pub fn total_demand(&self) -> i64 {
        self.houses.iter().map(|house| house.demand()).sum()
    }

    /// Returns total capacity of all generators.
    pub fn total_capacity(&self) -> i64 {
        self.generators.iter().map(|generator| generator.capacity).sum()
    }
}
