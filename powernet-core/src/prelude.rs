//! This module reimports commonly used types.

pub use crate::models::{
    Assignment, ConnectOutcome, Cost, DemandClass, Generator, GeneratorLoad, House, Network, ValidationResult,
    Violation, DEFAULT_LAMBDA, evaluate, generator_loads, validate,
};

pub use crate::solver::{
    GraspConfig, LocalSearchStats, RestartSummary, SolveResult, Solver, construct_greedy_randomized, improve_locally,
};

pub use crate::utils::{
    DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Random, compare_floats,
};
