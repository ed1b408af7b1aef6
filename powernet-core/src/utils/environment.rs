use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of the environment specific settings which affect the solver run.
#[derive(Clone)]
pub struct Environment {
    /// A seed of the master random stream. When absent, the stream is seeded from entropy.
    pub seed: Option<u64>,
    /// Amount of restarts which can be run at the same time.
    pub parallelism: usize,
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(seed: Option<u64>, parallelism: usize, logger: InfoLogger) -> Self {
        Self { seed, parallelism: parallelism.max(1), logger }
    }

    /// Sets a seed of the master random stream.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets parallelism degree.
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    /// Sets information logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Creates the master random stream.
    pub fn create_random(&self) -> Box<dyn Random> {
        match self.seed {
            Some(seed) => Box::new(DefaultRandom::new_with_seed(seed)),
            None => Box::<DefaultRandom>::default(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(None, 1, Arc::new(|_: &str| {}))
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
