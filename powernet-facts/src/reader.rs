#[cfg(test)]
#[path = "../tests/unit/reader_test.rs"]
mod reader_test;

use crate::{FactError, FactWarning};
use powernet_core::models::{DemandClass, Network};
use powernet_core::utils::GenericError;
use std::io::{BufRead, BufReader, Read};

/// A trait to read a network from facts.
pub trait FactsNetwork {
    /// Reads a network. Fails on the first line which cannot be accepted.
    fn read_facts(self) -> Result<Network, GenericError>;

    /// Reads a network together with warnings about facts which redefine earlier ones.
    fn read_facts_with_warnings(self) -> Result<(Network, Vec<FactWarning>), GenericError>;
}

impl<R: Read> FactsNetwork for BufReader<R> {
    fn read_facts(self) -> Result<Network, GenericError> {
        read_facts_format(self).map(|(network, _)| network)
    }

    fn read_facts_with_warnings(self) -> Result<(Network, Vec<FactWarning>), GenericError> {
        read_facts_format(self)
    }
}

impl FactsNetwork for String {
    fn read_facts(self) -> Result<Network, GenericError> {
        read_facts_format(BufReader::new(self.as_bytes())).map(|(network, _)| network)
    }

    fn read_facts_with_warnings(self) -> Result<(Network, Vec<FactWarning>), GenericError> {
        read_facts_format(BufReader::new(self.as_bytes()))
    }
}

fn read_facts_format<R: Read>(reader: BufReader<R>) -> Result<(Network, Vec<FactWarning>), GenericError> {
    FactsReader {
        buffer: String::new(),
        reader,
        line: 0,
        section: Section::Generators,
        network: Network::default(),
        warnings: Vec::new(),
    }
    .read_network()
}

/// Sections of the facts input in their required order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    Generators,
    Houses,
    Connections,
}

enum Fact<'a> {
    Generator { name: &'a str, capacity: &'a str },
    House { name: &'a str, class: &'a str },
    Connection { first: &'a str, second: &'a str },
}

struct FactsReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    line: usize,
    section: Section,
    network: Network,
    warnings: Vec<FactWarning>,
}

impl<R: Read> FactsReader<R> {
    fn read_network(mut self) -> Result<(Network, Vec<FactWarning>), GenericError> {
        loop {
            self.buffer.clear();
            let line = self.line + 1;
            if self.reader.read_line(&mut self.buffer).map_err(|err| FactError::new(line, err.to_string()))? == 0 {
                break;
            }
            self.line += 1;

            let content = self.buffer.chars().filter(|c| !c.is_whitespace()).collect::<String>();
            if content.is_empty() || content.starts_with("//") {
                continue;
            }

            self.accept_line(content.as_str()).map_err(|reason| FactError::new(self.line, reason))?;
        }

        Ok((self.network, self.warnings))
    }

    fn accept_line(&mut self, content: &str) -> Result<(), String> {
        match parse_fact(content)? {
            Fact::Generator { name, capacity } => {
                self.enter_section(Section::Generators, "generator")?;
                let capacity = capacity
                    .parse::<i64>()
                    .map_err(|_| format!("invalid capacity '{capacity}' of generator '{name}'"))?;
                if let Some(previous) = self.network.upsert_generator(name, capacity).map_err(|err| err.to_string())? {
                    self.warn(format!(
                        "generator '{name}' is redefined: capacity {} replaced by {capacity}",
                        previous.capacity
                    ));
                }
            }
            Fact::House { name, class } => {
                self.enter_section(Section::Houses, "house")?;
                let class = class.parse::<DemandClass>().map_err(|err| err.to_string())?;
                if let Some(previous) = self.network.upsert_house(name, class) {
                    self.warn(format!(
                        "house '{name}' is redefined: demand class {} replaced by {class}",
                        previous.class
                    ));
                }
            }
            Fact::Connection { first, second } => {
                self.enter_section(Section::Connections, "connection")?;
                let (house, generator) =
                    if self.network.house(first).is_some() { (first, second) } else { (second, first) };

                if self.network.house(house).is_none() || self.network.generator(generator).is_none() {
                    return Err(format!("connection between undefined elements '{first}' and '{second}'"));
                }

                if let Some(previous) = self.network.set_assignment(house, generator).map_err(|err| err.to_string())? {
                    self.warn(format!("house '{house}' is reconnected: generator {previous} replaced by {generator}"));
                }
            }
        }

        Ok(())
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(FactWarning::new(self.line, message));
    }

    fn enter_section(&mut self, section: Section, kind: &str) -> Result<(), String> {
        match self.section.cmp(&section) {
            std::cmp::Ordering::Greater => Err(format!(
                "{kind} is defined out of order: expected generators, then houses, then connections"
            )),
            _ => {
                self.section = section;
                Ok(())
            }
        }
    }
}

/// Parses a fact without whitespace: `keyword(first,second).`
fn parse_fact(content: &str) -> Result<Fact<'_>, String> {
    let content = content.strip_suffix('.').ok_or_else(|| "fact must be terminated by '.'".to_string())?;

    let (keyword, arguments) = content
        .strip_suffix(')')
        .and_then(|content| content.split_once('('))
        .ok_or_else(|| format!("malformed fact '{content}', expected 'keyword(arguments)'"))?;

    let keyword = keyword.to_ascii_lowercase();
    if !matches!(keyword.as_str(), "generator" | "house" | "connexion" | "connection") {
        return Err(format!("unknown fact '{keyword}'"));
    }

    let (first, second) = match arguments.split(',').collect::<Vec<_>>().as_slice() {
        [first, second] if !first.is_empty() && !second.is_empty() => (*first, *second),
        _ => return Err(format!("'{keyword}' expects two non-empty arguments, got '{arguments}'")),
    };

    Ok(match keyword.as_str() {
        "generator" => Fact::Generator { name: first, capacity: second },
        "house" => Fact::House { name: first, class: second },
        _ => Fact::Connection { first, second },
    })
}
