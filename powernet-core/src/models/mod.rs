//! Contains the power network model: an entity registry, a cost evaluator and a validator.

mod cost;
pub use self::cost::*;

mod network;
pub use self::network::*;

mod validation;
pub use self::validation::*;

pub mod examples;
