use serde_json::json;
use symscope_api::GraphQlRequest;

pub const REPOSITORY_SYMBOL_OPERATION: &str = "RepositoryExpSymbol";
pub const REPOSITORY_SYMBOLS_OPERATION: &str = "RepositoryExpSymbols";

/// Fields fetched for every symbol, at every level of the tree.
pub const EXP_SYMBOL_FIELDS: &str = r#"
fragment ExpSymbolFields on ExpSymbol {
    text
    url
    moniker {
        kind
        scheme
        identifier
    }
    hover {
        markdown {
            text
        }
    }
    references {
        nodes {
            range {
                start {
                    line
                    character
                }
                end {
                    line
                    character
                }
            }
            resource {
                path
                commit {
                    oid
                }
                repository {
                    name
                }
            }
        }
    }
}
"#;

// Children are requested two levels down; the decoder never looks deeper.
const SYMBOL_TREE_SELECTION: &str = r#"
    expSymbols {
        nodes {
            ...ExpSymbolFields
            children {
                ...ExpSymbolFields
                children {
                    ...ExpSymbolFields
                }
            }
        }
    }
"#;

fn repository_tree_query(operation: &str, path_argument: &str, variables: &str) -> String {
    format!(
        r#"query {operation}({variables}) {{
    node(id: $repo) {{
        ... on Repository {{
            commit(rev: $commitID) {{
                tree(path: {path_argument}) {{
{SYMBOL_TREE_SELECTION}
                }}
            }}
        }}
    }}
}}
{EXP_SYMBOL_FIELDS}"#
    )
}

/// Symbol tree at the repository root, for resolving a single moniker.
pub fn repository_symbol_request(repository_id: &str, commit_id: &str) -> GraphQlRequest {
    GraphQlRequest::new(
        REPOSITORY_SYMBOL_OPERATION,
        repository_tree_query(
            REPOSITORY_SYMBOL_OPERATION,
            "\"\"",
            "$repo: ID!, $commitID: String!",
        ),
        json!({
            "repo": repository_id,
            "commitID": commit_id,
        }),
    )
}

/// Symbol forest under `path`, for the symbol listing.
pub fn repository_symbols_request(repository_id: &str, commit_id: &str, path: &str) -> GraphQlRequest {
    GraphQlRequest::new(
        REPOSITORY_SYMBOLS_OPERATION,
        repository_tree_query(
            REPOSITORY_SYMBOLS_OPERATION,
            "$path",
            "$repo: ID!, $commitID: String!, $path: String!",
        ),
        json!({
            "repo": repository_id,
            "commitID": commit_id,
            "path": path,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_request_targets_root_tree() {
        let req = repository_symbol_request("UmVwb3NpdG9yeTox", "abc123");
        assert_eq!(req.operation_name, REPOSITORY_SYMBOL_OPERATION);
        assert!(req.query.starts_with("query RepositoryExpSymbol($repo: ID!, $commitID: String!)"));
        assert!(req.query.contains("tree(path: \"\")"));
        assert!(req.query.contains("fragment ExpSymbolFields on ExpSymbol"));
        assert_eq!(req.variables["repo"], "UmVwb3NpdG9yeTox");
        assert_eq!(req.variables["commitID"], "abc123");
        assert!(req.variables.get("path").is_none());
    }

    #[test]
    fn symbols_request_passes_path_variable() {
        let req = repository_symbols_request("UmVwb3NpdG9yeTox", "abc123", "src/go");
        assert_eq!(req.operation_name, REPOSITORY_SYMBOLS_OPERATION);
        assert!(req.query.contains("$path: String!"));
        assert!(req.query.contains("tree(path: $path)"));
        assert_eq!(req.variables["path"], "src/go");
    }

    #[test]
    fn children_are_requested_two_levels_deep() {
        let req = repository_symbol_request("r", "c");
        assert_eq!(req.query.matches("children {").count(), 2);
        // one spread per level plus the fragment definition itself
        assert_eq!(req.query.matches("ExpSymbolFields").count(), 4);
    }
}
