//! Contains command line specific extensions of the core functionality.

pub mod report;
pub mod solve;
