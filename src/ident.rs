use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// An opaque identifier handed out by the backend.
///
/// The backend is inconsistent about whether identifiers are numbers or
/// strings, so both are accepted and held in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawIdentifier", into = "String")]
pub struct Identifier(String);

/// Identifies a vending machine.
pub type MachineId = Identifier;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawIdentifier> for Identifier {
    fn from(value: RawIdentifier) -> Self {
        match value {
            RawIdentifier::Number(number) => Identifier(number.to_string()),
            RawIdentifier::Text(text) => Identifier(text),
        }
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier(value)
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier(value.to_string())
    }
}

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
