use super::location::ReferenceLocation;
use super::moniker::Moniker;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of references shown as usage examples after the definition site.
pub const USAGE_EXAMPLE_LIMIT: usize = 3;

/// A symbol as returned by one repository-tree fetch.
///
/// Records are built fresh for every response and own their children; a tree
/// is at most three levels deep (root, child, grandchild).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct SymbolRecord {
    /// Display label. Empty when the server sent none.
    #[serde(default)]
    pub text: String,
    /// Server-computed link to the symbol page.
    #[serde(default)]
    pub url: Option<String>,
    pub moniker: Moniker,
    #[serde(default)]
    pub hover_markdown: Option<String>,
    #[serde(default)]
    pub references: Vec<ReferenceLocation>,
    #[serde(default)]
    pub children: Vec<SymbolRecord>,
}

impl SymbolRecord {
    pub fn new(moniker: Moniker) -> Self {
        Self {
            text: String::new(),
            url: None,
            moniker,
            hover_markdown: None,
            references: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SymbolRecord>) -> Self {
        self.children = children;
        self
    }

    /// The first reference, which the code intelligence backend lists as the
    /// definition site.
    pub fn definition(&self) -> Option<&ReferenceLocation> {
        self.references.first()
    }

    /// Up to three references following the definition site.
    pub fn usage_examples(&self) -> &[ReferenceLocation] {
        if self.references.len() <= 1 {
            return &[];
        }
        let end = self.references.len().min(1 + USAGE_EXAMPLE_LIMIT);
        &self.references[1..end]
    }

    /// Label used in outlines: `text`, falling back to the moniker identifier.
    pub fn label(&self) -> &str {
        if self.text.is_empty() {
            &self.moniker.identifier
        } else {
            &self.text
        }
    }
}
