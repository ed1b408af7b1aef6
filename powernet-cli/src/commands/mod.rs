use clap::{Arg, ArgMatches};

pub mod add;
pub mod check;
pub mod connect;
pub mod disconnect;
pub mod evaluate;
pub mod remove;
pub mod show;
pub mod solve;

use powernet_cli::core::models::Network;
use powernet_cli::facts::{FactsNetwork, FactsWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

const FACTS_ARG_NAME: &str = "FACTS";
const NAME_ARG_NAME: &str = "NAME";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn get_facts_arg() -> Arg {
    Arg::new(FACTS_ARG_NAME).help("Sets the network facts file to use").required(true).index(1)
}

fn get_name_arg(help: &'static str) -> Arg {
    Arg::new(NAME_ARG_NAME).help(help).required(true).index(2)
}

fn get_name(matches: &ArgMatches) -> Result<&str, String> {
    matches
        .get_one::<String>(NAME_ARG_NAME)
        .map(|name| name.as_str())
        .ok_or_else(|| "name is not specified".to_string())
}

fn get_out_result_arg() -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help("Specifies path to file for the resulting network facts, stdout is used when omitted")
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
        .required(false)
}

fn read_network(matches: &ArgMatches) -> Result<Network, String> {
    let path = matches.get_one::<String>(FACTS_ARG_NAME).ok_or_else(|| "facts file is not specified".to_string())?;

    let (network, warnings) = BufReader::new(open_file(path, "facts")?)
        .read_facts_with_warnings()
        .map_err(|err| format!("cannot read network from '{path}': {err}"))?;

    warnings.iter().for_each(|warning| eprintln!("warning: {path}: {warning}"));

    Ok(network)
}

fn write_network<F>(
    matches: &ArgMatches,
    network: &Network,
    header: Option<&str>,
    out_writer_func: F,
) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut writer = out_writer_func(out_file);

    if let Some(header) = header {
        header.lines().try_for_each(|line| writeln!(writer, "// {line}")).map_err(|err| err.to_string())?;
    }

    network.write_facts(&mut writer).map_err(|err| err.to_string())
}

fn write_text<F>(text: &str, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let mut writer = out_writer_func(None);

    writeln!(writer, "{text}").and_then(|_| writer.flush()).map_err(|err| err.to_string())
}
