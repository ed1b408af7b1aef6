#[cfg(test)]
#[path = "../../tests/unit/commands/evaluate_test.rs"]
mod evaluate_test;

use super::*;
use clap::Command;
use powernet_cli::core::models::{DEFAULT_LAMBDA, evaluate, generator_loads};
use powernet_cli::extensions::report::{format_cost, format_loads};

const LAMBDA_ARG_NAME: &str = "lambda";

pub fn get_evaluate_app() -> Command {
    Command::new("evaluate")
        .about("Evaluates cost of the current assignment")
        .arg(get_facts_arg())
        .arg(
            Arg::new(LAMBDA_ARG_NAME)
                .help("Specifies overload penalty weight")
                .short('l')
                .long(LAMBDA_ARG_NAME)
                .allow_negative_numbers(true)
                .required(false),
        )
}

pub fn run_evaluate<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let lambda = parse_int_value::<i64>(matches, LAMBDA_ARG_NAME, "lambda")?.unwrap_or(DEFAULT_LAMBDA);
    if lambda < 0 {
        return Err(format!("lambda must not be negative, got {lambda}"));
    }

    let network = read_network(matches)?;
    if network.generators().is_empty() {
        return Err("cannot evaluate network without generators".to_string());
    }

    let cost = evaluate(&network, lambda);
    let text = [format_cost(&cost), format_loads(generator_loads(&network).as_slice())].join("\n");

    write_text(text.as_str(), out_writer_func)
}
