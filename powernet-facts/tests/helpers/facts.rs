/// Builds facts text line by line.
#[derive(Default)]
pub struct FactsBuilder {
    lines: Vec<String>,
}

impl FactsBuilder {
    pub fn add_generator(&mut self, name: &str, capacity: i64) -> &mut Self {
        self.add_line(format!("generator({name},{capacity}).").as_str())
    }

    pub fn add_house(&mut self, name: &str, class: &str) -> &mut Self {
        self.add_line(format!("house({name},{class}).").as_str())
    }

    pub fn add_connection(&mut self, house: &str, generator: &str) -> &mut Self {
        self.add_line(format!("connexion({house},{generator}).").as_str())
    }

    pub fn add_line(&mut self, line: &str) -> &mut Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}
