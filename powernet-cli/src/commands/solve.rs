#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{ArgAction, Command};
use powernet_cli::core::models::{generator_loads, validate};
use powernet_cli::core::solver::Solver;
use powernet_cli::extensions::report::format_solve_result;
use powernet_cli::extensions::solve::config::*;
use std::sync::Arc;

const CONFIG_ARG_NAME: &str = "config";
const RESTARTS_ARG_NAME: &str = "restarts";
const ALPHA_ARG_NAME: &str = "alpha";
const LAMBDA_ARG_NAME: &str = "lambda";
const MAX_PASSES_ARG_NAME: &str = "max-passes";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const PARALLELISM_ARG_NAME: &str = "parallelism";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Searches for the house to generator assignment with the lowest cost")
        .arg(get_facts_arg())
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file, command line arguments override it")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RESTARTS_ARG_NAME)
                .help("Specifies amount of restarts")
                .short('r')
                .long(RESTARTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ALPHA_ARG_NAME)
                .help("Specifies randomization of construction in [0, 1]: 0 is greedy, 1 is uniform")
                .short('a')
                .long(ALPHA_ARG_NAME)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new(LAMBDA_ARG_NAME)
                .help("Specifies overload penalty weight")
                .short('l')
                .long(LAMBDA_ARG_NAME)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new(MAX_PASSES_ARG_NAME)
                .help("Specifies maximum amount of local search passes")
                .long(MAX_PASSES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed to make runs reproducible")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLELISM_ARG_NAME)
                .help("Specifies amount of restarts run in parallel, 0 means amount of cpus")
                .short('p')
                .long(PARALLELISM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether solver progress is printed to stderr")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(get_out_result_arg())
}

pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let config = get_config(matches)?;
    let grasp_config = create_grasp_config(&config)?;
    let environment = create_environment(&config);

    let mut network = read_network(matches)?;

    let validation = validate(&network);
    if !validation.is_evaluable() {
        let reasons = validation.violations.iter().filter(|violation| violation.is_hard()).map(|v| v.to_string());
        return Err(format!("cannot solve network: {}", reasons.collect::<Vec<_>>().join(", ")));
    }

    let result = Solver::new(grasp_config, Arc::new(environment)).solve(&mut network).map_err(|err| err.to_string())?;
    let report = format_solve_result(&result, generator_loads(&network).as_slice());

    write_network(matches, &network, Some(report.as_str()), out_writer_func)
}

/// Reads config file if specified and applies command line overrides.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    if let Some(restarts) = parse_int_value::<usize>(matches, RESTARTS_ARG_NAME, "restarts")? {
        config.grasp_mut().restarts = Some(restarts);
    }
    if let Some(alpha) = parse_float_value::<f64>(matches, ALPHA_ARG_NAME, "alpha")? {
        config.grasp_mut().alpha = Some(alpha);
    }
    if let Some(lambda) = parse_int_value::<i64>(matches, LAMBDA_ARG_NAME, "lambda")? {
        config.grasp_mut().lambda = Some(lambda);
    }
    if let Some(max_passes) = parse_int_value::<usize>(matches, MAX_PASSES_ARG_NAME, "max passes")? {
        config.grasp_mut().max_passes = Some(max_passes);
    }
    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")? {
        config.environment_mut().seed = Some(seed);
    }
    if let Some(parallelism) = parse_int_value::<usize>(matches, PARALLELISM_ARG_NAME, "parallelism")? {
        config.environment_mut().parallelism = Some(parallelism);
    }
    if matches.get_flag(LOG_ARG_NAME) {
        config.set_logging(true);
    }

    Ok(config)
}
