use std::fmt::Write;

use symscope_api::SymbolRecord;
use symscope_core::hover::HoverParts;
use symscope_core::route::symbol_link;
use tabled::Tabled;

/// One line of a symbol outline.
#[derive(Tabled)]
pub struct SymbolRow {
    #[tabled(rename = "Symbol")]
    pub name: String,
    #[tabled(rename = "Moniker")]
    pub moniker: String,
    #[tabled(rename = "Defined at")]
    pub location: String,
    #[tabled(rename = "Refs")]
    pub references: usize,
}

impl SymbolRow {
    pub fn from_record(depth: usize, record: &SymbolRecord) -> Self {
        Self {
            name: format!("{}{}", "  ".repeat(depth), record.label()),
            moniker: record.moniker.key().to_string(),
            location: record
                .definition()
                .map(|d| d.short_label())
                .unwrap_or_else(|| "-".to_string()),
            references: record.references.len(),
        }
    }
}

/// `<endpoint>/<repo>@<commit>`, taken from the definition site.
pub fn repo_rev_prefix(endpoint: &str, record: &SymbolRecord) -> Option<String> {
    let definition = record.definition()?;
    Some(format!(
        "{}/{}@{}",
        endpoint.trim_end_matches('/'),
        definition.repository_name,
        definition.commit_id
    ))
}

/// Human-readable detail view of a resolved symbol.
pub fn render_symbol(endpoint: &str, record: &SymbolRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  ({})", record.label(), record.moniker.key());

    let link = record.url.as_ref().map(|url| {
        if url.starts_with('/') {
            format!("{}{}", endpoint.trim_end_matches('/'), url)
        } else {
            url.clone()
        }
    });
    if let Some(link) = link.or_else(|| {
        repo_rev_prefix(endpoint, record).and_then(|prefix| symbol_link(&prefix, record))
    }) {
        let _ = writeln!(out, "{}", link);
    }

    let hover = HoverParts::of(record);
    if let Some(signature) = hover.signature {
        let _ = writeln!(out, "\n{}", signature);
    }
    if let Some(documentation) = hover.documentation {
        let _ = writeln!(out, "\n{}", documentation);
    }

    if let Some(definition) = record.definition() {
        let _ = writeln!(out, "\nDefinition: {}", definition.uri());
    }
    let examples = record.usage_examples();
    if !examples.is_empty() {
        let _ = writeln!(out, "\nUsage examples:");
        for example in examples {
            let _ = writeln!(out, "  {}", example.short_label());
        }
    }
    out
}
