//! The solver module contains a GRASP (greedy randomized adaptive search procedure) optimizer
//! which searches for a house to generator assignment with the lowest cost.
//!
//! Every restart builds an assignment with randomized greedy construction and refines it with
//! first-improvement local search. Restarts are independent: each one works on its own copy of
//! the network with its own random stream, so they can run in parallel. Only the best assignment
//! is committed back to the network.
//!
//! # Examples
//!
//! ```
//! # use powernet_core::models::examples::create_example_network;
//! # use std::sync::Arc;
//! use powernet_core::prelude::*;
//!
//! let mut network = create_example_network()?;
//! let environment = Arc::new(Environment::default().with_seed(42));
//! let config = GraspConfig::default().with_restarts(10);
//!
//! let result = Solver::new(config, environment).solve(&mut network)?;
//!
//! assert_eq!(result.cost.total, 0.);
//! assert!(validate(&network).is_ok());
//! # Ok::<(), GenericError>(())
//! ```

mod config;
pub use self::config::GraspConfig;

mod construction;
pub use self::construction::construct_greedy_randomized;

mod local_search;
pub use self::local_search::{LocalSearchStats, improve_locally};

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::models::{Assignment, Cost, Network, evaluate};
use crate::utils::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Keeps summary of a single restart.
#[derive(Clone, Debug, PartialEq)]
pub struct RestartSummary {
    /// Restart index, starting from zero.
    pub index: usize,
    /// Total cost after construction, before local search.
    pub constructed: Float,
    /// Total cost after local search.
    pub total: Float,
    /// Local search statistics.
    pub search: LocalSearchStats,
}

/// Keeps result of the solver run.
#[derive(Clone, Debug)]
pub struct SolveResult {
    /// Cost of the committed assignment.
    pub cost: Cost,
    /// Index of the restart which produced the committed assignment, `None` when the assignment
    /// the network had before the run was kept.
    pub best_restart: Option<usize>,
    /// Summaries of all restarts in their index order.
    pub restarts: Vec<RestartSummary>,
    /// Solver run duration in milliseconds.
    pub duration: u128,
}

/// Runs a single GRASP restart on the network: construction followed by local search.
pub fn run_restart(
    network: &mut Network,
    index: usize,
    config: &GraspConfig,
    random: &dyn Random,
) -> GenericResult<RestartSummary> {
    let constructed = construct_greedy_randomized(network, config.lambda, config.alpha, random)?;
    let search = improve_locally(network, config.lambda, config.max_passes)?;
    let cost = evaluate(network, config.lambda);

    Ok(RestartSummary { index, constructed: constructed.total, total: cost.total, search })
}

/// A GRASP solver.
pub struct Solver {
    config: GraspConfig,
    environment: Arc<Environment>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(config: GraspConfig, environment: Arc<Environment>) -> Self {
        Self { config, environment }
    }

    /// Searches for the assignment with the lowest cost and commits it to the network.
    ///
    /// A complete assignment already present in the network is replaced only by a strictly
    /// cheaper one. On error, the network is left untouched.
    pub fn solve(&self, network: &mut Network) -> GenericResult<SolveResult> {
        self.config.validate()?;

        if network.generators().is_empty() {
            return Err("cannot solve network without generators".into());
        }

        let logger = self.environment.logger.as_ref();
        logger(
            format!(
                "configured to use restarts: {}, alpha: {}, lambda: {}, max passes: {}, parallelism: {}",
                self.config.restarts,
                self.config.alpha,
                self.config.lambda,
                self.config.max_passes,
                self.environment.parallelism
            )
            .as_str(),
        );

        let timer = Timer::start();

        let random = self.environment.create_random();
        let seeds = (0..self.config.restarts).map(|index| (index, random.next_seed())).collect::<Vec<_>>();

        let template: &Network = network;
        let config = &self.config;
        let run = |&(index, seed): &(usize, u64)| -> GenericResult<Restarts> {
            let mut candidate = template.clone();
            let random = DefaultRandom::new_with_seed(seed);
            let summary = run_restart(&mut candidate, index, config, &random)?;

            Ok(Restarts { summaries: vec![summary.clone()], best: Some((summary, candidate.assignment().clone())) })
        };

        let restarts = if self.environment.parallelism > 1 {
            ThreadPool::new(self.environment.parallelism)?
                .execute(|| map_reduce(seeds.as_slice(), run, || Ok(Restarts::default()), merge_restarts))
        } else {
            seeds.iter().map(run).fold(Ok(Restarts::default()), merge_restarts)
        }?;

        let (best, assignment) = restarts.best.ok_or_else(|| GenericError::from("no restart has been completed"))?;

        let incumbent = if is_complete(network) { Some(evaluate(network, self.config.lambda).total) } else { None };
        let best_restart = match incumbent {
            Some(total) if compare_floats(best.total, total) != Ordering::Less => None,
            _ => {
                network.replace_assignment(assignment)?;
                Some(best.index)
            }
        };

        let cost = evaluate(network, self.config.lambda);

        log_restarts(logger, restarts.summaries.as_slice());
        let origin = best_restart
            .map_or_else(|| "kept current assignment".to_string(), |idx| format!("found at restart {}", idx + 1));
        logger(
            format!(
                "[{}ms] best cost: {:.6} (dispersion: {:.6}, overload: {:.6}) {}",
                timer.elapsed_millis(),
                cost.total,
                cost.dispersion,
                cost.overload,
                origin
            )
            .as_str(),
        );

        Ok(SolveResult { cost, best_restart, restarts: restarts.summaries, duration: timer.elapsed_millis() })
    }
}

/// Checks whether every house is connected to an existing generator.
fn is_complete(network: &Network) -> bool {
    network.houses().iter().all(|house| {
        network.generator_of(house.name.as_str()).is_some_and(|generator| network.generator(generator).is_some())
    })
}

/// Keeps summaries of completed restarts and the best assignment among them.
#[derive(Default)]
struct Restarts {
    summaries: Vec<RestartSummary>,
    best: Option<(RestartSummary, Assignment)>,
}

/// Merges restarts keeping their order, the right best replaces the left one only if it is
/// strictly better.
fn merge_restarts(left: GenericResult<Restarts>, right: GenericResult<Restarts>) -> GenericResult<Restarts> {
    let (mut left, right) = (left?, right?);

    left.summaries.extend(right.summaries);
    left.best = match (left.best, right.best) {
        (Some(left), Some(right)) => {
            if compare_floats(right.0.total, left.0.total) == Ordering::Less {
                Some(right)
            } else {
                Some(left)
            }
        }
        (left, right) => left.or(right),
    };

    Ok(left)
}

/// Logs restarts which improved the best known cost.
fn log_restarts(logger: &(dyn Fn(&str) + Send + Sync), summaries: &[RestartSummary]) {
    summaries.iter().fold(Float::INFINITY, |best, summary| {
        if summary.total < best {
            logger(
                format!(
                    "[restart {}] best cost: {:.6} (constructed: {:.6}, passes: {}, moves: {})",
                    summary.index + 1,
                    summary.total,
                    summary.constructed,
                    summary.search.passes,
                    summary.search.moves
                )
                .as_str(),
            );
            summary.total
        } else {
            best
        }
    });
}
