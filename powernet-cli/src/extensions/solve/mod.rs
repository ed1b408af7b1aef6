//! Contains solver configuration read from a file.

pub mod config;
