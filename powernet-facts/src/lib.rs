//! Facts crate contains logic to read and write power networks in a line-oriented text format.
//!
//! # Format
//!
//! One fact per line, terminated by a period. Generators come first, then houses, then
//! connections:
//!
//! ```text
//! // two generators
//! generator(A,50).
//! generator(B,50).
//! house(h1,HIGH).
//! house(h2,MEDIUM).
//! connexion(h1,A).
//! connexion(h2,B).
//! ```
//!
//! Blank lines and lines starting with `//` are ignored, whitespace inside a fact is ignored and
//! keywords are case-insensitive.
//!
//! # Examples
//!
//! ```
//! use powernet_facts::FactsNetwork;
//!
//! let network = "generator(A,50).\nhouse(h1,LOW).\nconnexion(h1,A).".to_string().read_facts()?;
//!
//! assert_eq!(network.generator_of("h1"), Some("A"));
//! # Ok::<(), powernet_facts::core::utils::GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use powernet_core as core;

mod error;
pub use self::error::{FactError, FactWarning};

mod reader;
pub use self::reader::FactsNetwork;

mod writer;
pub use self::writer::FactsWriter;
