//! A command line interface to balance load of a power distribution network.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use clap::{ArgMatches, Command};
use commands::add::{get_add_generator_app, get_add_house_app, run_add_generator, run_add_house};
use commands::check::{get_check_app, run_check};
use commands::connect::{get_connect_app, run_connect};
use commands::create_write_buffer;
use commands::disconnect::{get_disconnect_app, run_disconnect};
use commands::evaluate::{get_evaluate_app, run_evaluate};
use commands::remove::{get_remove_generator_app, get_remove_house_app, run_remove_generator, run_remove_house};
use commands::show::{get_show_app, run_show};
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_subcommand(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Power Network Load Balancer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to balance load of a power distribution network")
        .subcommand(get_solve_app())
        .subcommand(get_check_app())
        .subcommand(get_evaluate_app())
        .subcommand(get_show_app())
        .subcommand(get_add_generator_app())
        .subcommand(get_add_house_app())
        .subcommand(get_connect_app())
        .subcommand(get_disconnect_app())
        .subcommand(get_remove_generator_app())
        .subcommand(get_remove_house_app())
}

fn run_subcommand(matches: &ArgMatches) -> Result<(), String> {
    match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("check", check_matches)) => run_check(check_matches, create_write_buffer),
        Some(("evaluate", evaluate_matches)) => run_evaluate(evaluate_matches, create_write_buffer),
        Some(("show", show_matches)) => run_show(show_matches, create_write_buffer),
        Some(("add-generator", add_matches)) => run_add_generator(add_matches, create_write_buffer),
        Some(("add-house", add_matches)) => run_add_house(add_matches, create_write_buffer),
        Some(("connect", connect_matches)) => run_connect(connect_matches, create_write_buffer),
        Some(("disconnect", disconnect_matches)) => run_disconnect(disconnect_matches, create_write_buffer),
        Some(("remove-generator", remove_matches)) => run_remove_generator(remove_matches, create_write_buffer),
        Some(("remove-house", remove_matches)) => run_remove_house(remove_matches, create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used. Use -h to print help information.".to_string()),
    }
}
