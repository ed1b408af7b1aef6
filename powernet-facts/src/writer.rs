#[cfg(test)]
#[path = "../tests/unit/writer_test.rs"]
mod writer_test;

use powernet_core::models::Network;
use powernet_core::utils::GenericResult;
use std::io::{BufWriter, Write};

/// A trait to write a network as facts.
pub trait FactsWriter<W: Write> {
    /// Writes generators, houses and connections sections in registry order. Connections to
    /// generators which are no longer in the registry are skipped.
    fn write_facts(&self, writer: &mut BufWriter<W>) -> GenericResult<()>;
}

impl<W: Write> FactsWriter<W> for Network {
    fn write_facts(&self, writer: &mut BufWriter<W>) -> GenericResult<()> {
        for generator in self.generators() {
            writeln!(writer, "generator({},{}).", generator.name, generator.capacity)?;
        }

        for house in self.houses() {
            writeln!(writer, "house({},{}).", house.name, house.class)?;
        }

        let connections = self.houses().iter().filter_map(|house| {
            self.generator_of(house.name.as_str())
                .filter(|generator| self.generator(generator).is_some())
                .map(|generator| (house.name.as_str(), generator))
        });

        for (house, generator) in connections {
            writeln!(writer, "connexion({house},{generator}).")?;
        }

        writer.flush()?;

        Ok(())
    }
}
