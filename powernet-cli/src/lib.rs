//! A power network load balancing library public API used by the command line interface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../../powernet-core/tests/helpers/macros.rs"]
#[macro_use]
mod macros;

pub use powernet_core as core;
pub use powernet_facts as facts;

pub mod extensions;
