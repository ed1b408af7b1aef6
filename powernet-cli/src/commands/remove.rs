#[cfg(test)]
#[path = "../../tests/unit/commands/remove_test.rs"]
mod remove_test;

use super::*;
use clap::Command;
use powernet_cli::extensions::report::format_disconnected;

pub fn get_remove_generator_app() -> Command {
    Command::new("remove-generator")
        .about("Removes a generator, houses connected to it become unassigned")
        .arg(get_facts_arg())
        .arg(get_name_arg("Sets the generator name"))
        .arg(get_out_result_arg())
}

pub fn get_remove_house_app() -> Command {
    Command::new("remove-house")
        .about("Removes a house together with its connection")
        .arg(get_facts_arg())
        .arg(get_name_arg("Sets the house name"))
        .arg(get_out_result_arg())
}

pub fn run_remove_generator<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let name = get_name(matches)?;

    let mut network = read_network(matches)?;
    let mut disconnected = network
        .assignment()
        .iter()
        .filter(|(_, generator)| generator.as_str() == name)
        .map(|(house, _)| house.clone())
        .collect::<Vec<_>>();
    disconnected.sort();

    network.remove_generator(name).ok_or_else(|| format!("unknown entity: generator '{name}' is not defined"))?;
    eprintln!("{}", format_disconnected(disconnected.as_slice()));

    write_network(matches, &network, None, out_writer_func)
}

pub fn run_remove_house<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let name = get_name(matches)?;

    let mut network = read_network(matches)?;
    network.remove_house(name).ok_or_else(|| format!("unknown entity: house '{name}' is not defined"))?;

    write_network(matches, &network, None, out_writer_func)
}
