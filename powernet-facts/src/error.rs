use powernet_core::utils::GenericError;
use std::fmt::{Display, Formatter};

/// Describes a line of the facts input which cannot be accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactError {
    /// 1-based line number.
    pub line: usize,
    /// Human readable reason.
    pub reason: String,
}

impl FactError {
    /// Creates a new instance of `FactError`.
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self { line, reason: reason.into() }
    }
}

impl Display for FactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

impl std::error::Error for FactError {}

impl From<FactError> for GenericError {
    fn from(error: FactError) -> Self {
        error.to_string().into()
    }
}

/// Describes a fact which was accepted but redefined an earlier one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactWarning {
    /// 1-based line number.
    pub line: usize,
    /// Human readable message.
    pub message: String,
}

impl FactWarning {
    /// Creates a new instance of `FactWarning`.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self { line, message: message.into() }
    }
}

impl Display for FactWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}
