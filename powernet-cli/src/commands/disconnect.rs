#[cfg(test)]
#[path = "../../tests/unit/commands/disconnect_test.rs"]
mod disconnect_test;

use super::*;
use clap::Command;

const HOUSE_ARG_NAME: &str = "HOUSE";

pub fn get_disconnect_app() -> Command {
    Command::new("disconnect")
        .about("Removes connection of a house, the house stays in the network")
        .arg(get_facts_arg())
        .arg(Arg::new(HOUSE_ARG_NAME).help("Sets the house name").required(true).index(2))
        .arg(get_out_result_arg())
}

pub fn run_disconnect<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let house = matches.get_one::<String>(HOUSE_ARG_NAME).ok_or_else(|| "house is not specified".to_string())?;

    let mut network = read_network(matches)?;
    if network.house(house).is_none() {
        return Err(format!("unknown entity: house '{house}' is not defined"));
    }

    match network.clear_assignment(house) {
        Some(generator) => eprintln!("house '{house}' is disconnected from generator '{generator}'"),
        None => eprintln!("house '{house}' has no connection"),
    }

    write_network(matches, &network, None, out_writer_func)
}
