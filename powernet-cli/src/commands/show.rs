#[cfg(test)]
#[path = "../../tests/unit/commands/show_test.rs"]
mod show_test;

use super::*;
use clap::Command;
use powernet_cli::extensions::report::format_network;

pub fn get_show_app() -> Command {
    Command::new("show").about("Prints generators, houses and their connections").arg(get_facts_arg())
}

pub fn run_show<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let network = read_network(matches)?;

    write_text(format_network(&network).as_str(), out_writer_func)
}
