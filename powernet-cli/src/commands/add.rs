#[cfg(test)]
#[path = "../../tests/unit/commands/add_test.rs"]
mod add_test;

use super::*;
use clap::Command;
use powernet_cli::core::models::DemandClass;
use powernet_cli::extensions::report::{format_generator_update, format_house_update};

const CAPACITY_ARG_NAME: &str = "CAPACITY";
const CLASS_ARG_NAME: &str = "CLASS";

pub fn get_add_generator_app() -> Command {
    Command::new("add-generator")
        .about("Adds a generator or updates capacity of the existing one")
        .arg(get_facts_arg())
        .arg(get_name_arg("Sets the generator name"))
        .arg(
            Arg::new(CAPACITY_ARG_NAME)
                .help("Sets the generator capacity in kW")
                .allow_negative_numbers(true)
                .required(true)
                .index(3),
        )
        .arg(get_out_result_arg())
}

pub fn get_add_house_app() -> Command {
    Command::new("add-house")
        .about("Adds a house or updates demand class of the existing one")
        .arg(get_facts_arg())
        .arg(get_name_arg("Sets the house name"))
        .arg(Arg::new(CLASS_ARG_NAME).help("Sets the demand class: LOW, MEDIUM or HIGH").required(true).index(3))
        .arg(get_out_result_arg())
}

pub fn run_add_generator<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let name = get_name(matches)?;
    let capacity = parse_int_value::<i64>(matches, CAPACITY_ARG_NAME, "capacity")?
        .ok_or_else(|| "capacity is not specified".to_string())?;

    let mut network = read_network(matches)?;
    let previous = network.upsert_generator(name, capacity).map_err(|err| err.to_string())?;

    if let Some((previous, current)) = previous.as_ref().zip(network.generator(name)) {
        eprintln!("{}", format_generator_update(previous, current));
    }

    write_network(matches, &network, None, out_writer_func)
}

pub fn run_add_house<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let name = get_name(matches)?;
    let class = matches
        .get_one::<String>(CLASS_ARG_NAME)
        .ok_or_else(|| "demand class is not specified".to_string())?
        .parse::<DemandClass>()
        .map_err(|err| err.to_string())?;

    let mut network = read_network(matches)?;
    let previous = network.upsert_house(name, class);

    if let Some((previous, current)) = previous.as_ref().zip(network.house(name)) {
        eprintln!("{}", format_house_update(previous, current));
    }

    write_network(matches, &network, None, out_writer_func)
}
