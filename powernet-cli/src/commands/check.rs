#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::Command;
use powernet_cli::core::models::validate;
use powernet_cli::extensions::report::format_violations;

pub fn get_check_app() -> Command {
    Command::new("check").about("Checks network feasibility and prints every violation").arg(get_facts_arg())
}

pub fn run_check<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let network = read_network(matches)?;
    let result = validate(&network);

    write_text(format_violations(&result).as_str(), out_writer_func)?;

    if result.is_ok() { Ok(()) } else { Err(format!("checker found {} violations", result.violations.len())) }
}
