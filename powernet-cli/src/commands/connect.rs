#[cfg(test)]
#[path = "../../tests/unit/commands/connect_test.rs"]
mod connect_test;

use super::*;
use clap::Command;

const HOUSE_ARG_NAME: &str = "HOUSE";
const GENERATOR_ARG_NAME: &str = "GENERATOR";

pub fn get_connect_app() -> Command {
    Command::new("connect")
        .about("Connects a house to a generator, replacing its previous connection")
        .arg(get_facts_arg())
        .arg(Arg::new(HOUSE_ARG_NAME).help("Sets the house name").required(true).index(2))
        .arg(Arg::new(GENERATOR_ARG_NAME).help("Sets the generator name").required(true).index(3))
        .arg(get_out_result_arg())
}

pub fn run_connect<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let house = matches.get_one::<String>(HOUSE_ARG_NAME).ok_or_else(|| "house is not specified".to_string())?;
    let generator =
        matches.get_one::<String>(GENERATOR_ARG_NAME).ok_or_else(|| "generator is not specified".to_string())?;

    let mut network = read_network(matches)?;
    let outcome = network.connect(house, generator).map_err(|err| err.to_string())?;

    if outcome.is_overloaded() {
        eprintln!(
            "warning: generator '{generator}' is overloaded after connecting '{house}': {}/{} kW",
            outcome.load, outcome.capacity
        );
    }

    write_network(matches, &network, None, out_writer_func)
}
