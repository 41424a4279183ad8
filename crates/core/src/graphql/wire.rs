//! Response shapes for the repository symbol queries.
//!
//! Every step of `node -> commit -> tree -> expSymbols` is optional: `null`
//! (or an absent field, as when the node is not a repository) means "not
//! there" and decodes to `None`. Values of the wrong type fail decoding and
//! are reported as a schema mismatch.

use serde::Deserialize;
use serde_json::Value;
use symscope_api::{ApiError, ApiResult, Moniker, Range, ReferenceLocation, SymbolRecord};

use crate::resolve::MAX_SYMBOL_DEPTH;

#[derive(Debug, Deserialize)]
struct RepositoryTreeData {
    node: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    commit: Option<CommitNode>,
}

#[derive(Debug, Deserialize)]
struct CommitNode {
    tree: Option<TreeNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreeNode {
    exp_symbols: Option<SymbolConnection>,
}

#[derive(Debug, Deserialize)]
struct SymbolConnection {
    nodes: Vec<WireSymbol>,
}

#[derive(Debug, Deserialize)]
struct WireSymbol {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    url: Option<String>,
    moniker: WireMoniker,
    #[serde(default)]
    hover: Option<WireHover>,
    #[serde(default)]
    references: Option<WireReferenceConnection>,
    #[serde(default)]
    children: Option<Vec<WireSymbol>>,
}

#[derive(Debug, Deserialize)]
struct WireMoniker {
    #[serde(default)]
    kind: String,
    scheme: String,
    identifier: String,
}

#[derive(Debug, Deserialize)]
struct WireHover {
    markdown: WireMarkdown,
}

#[derive(Debug, Deserialize)]
struct WireMarkdown {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WireReferenceConnection {
    nodes: Vec<WireLocation>,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    range: Option<Range>,
    resource: WireResource,
}

#[derive(Debug, Deserialize)]
struct WireResource {
    path: String,
    commit: WireCommit,
    repository: WireRepository,
}

#[derive(Debug, Deserialize)]
struct WireCommit {
    oid: String,
}

#[derive(Debug, Deserialize)]
struct WireRepository {
    name: String,
}

impl WireSymbol {
    fn into_record(self, depth: usize) -> SymbolRecord {
        let children = if depth + 1 < MAX_SYMBOL_DEPTH {
            self.children
                .unwrap_or_default()
                .into_iter()
                .map(|child| child.into_record(depth + 1))
                .collect()
        } else {
            Vec::new()
        };

        SymbolRecord {
            text: self.text.unwrap_or_default(),
            url: self.url,
            moniker: Moniker::new(
                self.moniker.kind,
                self.moniker.scheme,
                self.moniker.identifier,
            ),
            hover_markdown: self.hover.map(|h| h.markdown.text),
            references: self
                .references
                .map(|c| c.nodes.into_iter().map(WireLocation::into_location).collect())
                .unwrap_or_default(),
            children,
        }
    }
}

impl WireLocation {
    fn into_location(self) -> ReferenceLocation {
        ReferenceLocation {
            range: self.range,
            repository_name: self.resource.repository.name,
            commit_id: self.resource.commit.oid,
            file_path: self.resource.path,
        }
    }
}

/// Decodes `data` of a repository symbol query into the symbol forest.
///
/// Returns `Ok(None)` when any optional step of the chain is missing.
pub fn decode_symbol_forest(data: Value) -> ApiResult<Option<Vec<SymbolRecord>>> {
    let data: RepositoryTreeData = serde_json::from_value(data)
        .map_err(|e| ApiError::SchemaMismatch(format!("repository symbol tree: {}", e)))?;

    let forest = data
        .node
        .and_then(|node| node.commit)
        .and_then(|commit| commit.tree)
        .and_then(|tree| tree.exp_symbols)
        .map(|connection| {
            connection
                .nodes
                .into_iter()
                .map(|symbol| symbol.into_record(0))
                .collect()
        });

    Ok(forest)
}
