use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (kind, scheme, identifier) triple naming a code symbol independently of
/// where it is defined.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct Moniker {
    pub kind: String,
    pub scheme: String,
    pub identifier: String,
}

impl Moniker {
    pub fn new(
        kind: impl Into<String>,
        scheme: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            scheme: scheme.into(),
            identifier: identifier.into(),
        }
    }

    pub fn key(&self) -> MonikerKey {
        MonikerKey::new(self.scheme.clone(), self.identifier.clone())
    }
}

/// The lookup half of a moniker. `kind` never takes part in matching.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct MonikerKey {
    pub scheme: String,
    pub identifier: String,
}

impl MonikerKey {
    pub fn new(scheme: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for MonikerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.identifier)
    }
}

impl From<&Moniker> for MonikerKey {
    fn from(moniker: &Moniker) -> Self {
        moniker.key()
    }
}
