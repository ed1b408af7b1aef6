//! Core crate contains the building blocks to balance load of a power distribution network:
//! a registry of generators and houses, a cost model, a feasibility validator and a GRASP
//! optimizer which searches for the house to generator assignment with the lowest cost.
//!
//! The cost of an assignment has two competing terms: dispersion of generator utilization
//! around its mean and normalized overload above capacity, weighted by `lambda`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
