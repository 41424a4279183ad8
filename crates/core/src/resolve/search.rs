use super::matcher::{matches, matches_key};
use symscope_api::{MonikerKey, SymbolRecord};

/// Levels searched: root, child, grandchild. Anything deeper is never visited.
pub const MAX_SYMBOL_DEPTH: usize = 3;

/// Depth-first pre-order walk over a symbol forest, bounded by
/// [`MAX_SYMBOL_DEPTH`]. Yields `(depth, record)` with roots at depth 0.
pub struct SymbolWalk<'a> {
    stack: Vec<(usize, &'a SymbolRecord)>,
}

impl<'a> Iterator for SymbolWalk<'a> {
    type Item = (usize, &'a SymbolRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, record) = self.stack.pop()?;
        if depth + 1 < MAX_SYMBOL_DEPTH {
            self.stack
                .extend(record.children.iter().rev().map(|child| (depth + 1, child)));
        }
        Some((depth, record))
    }
}

pub fn walk(forest: &[SymbolRecord]) -> SymbolWalk<'_> {
    SymbolWalk {
        stack: forest.iter().rev().map(|root| (0, root)).collect(),
    }
}

/// First record in pre-order whose moniker is `(scheme, identifier)`.
///
/// `None` is the ordinary "no such symbol" answer. When several records share
/// the moniker, the one visited first wins.
pub fn find_symbol<'a>(
    forest: &'a [SymbolRecord],
    scheme: &str,
    identifier: &str,
) -> Option<&'a SymbolRecord> {
    walk(forest)
        .map(|(_, record)| record)
        .find(|record| matches(record, scheme, identifier))
}

pub fn find_symbol_by_key<'a>(
    forest: &'a [SymbolRecord],
    key: &MonikerKey,
) -> Option<&'a SymbolRecord> {
    find_symbol(forest, &key.scheme, &key.identifier)
}

/// Owning variant of [`find_symbol_by_key`]: consumes the forest and moves
/// the matching record (with its subtree) out of it.
pub fn take_symbol(forest: Vec<SymbolRecord>, key: &MonikerKey) -> Option<SymbolRecord> {
    take_at_depth(forest, key, 0)
}

fn take_at_depth(forest: Vec<SymbolRecord>, key: &MonikerKey, depth: usize) -> Option<SymbolRecord> {
    for record in forest {
        if matches_key(&record, key) {
            return Some(record);
        }
        if depth + 1 < MAX_SYMBOL_DEPTH {
            if let Some(found) = take_at_depth(record.children, key, depth + 1) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use symscope_api::Moniker;

    fn sym(identifier: &str, children: Vec<SymbolRecord>) -> SymbolRecord {
        SymbolRecord::new(Moniker::new("export", "go", identifier)).with_children(children)
    }

    fn labelled(identifier: &str, text: &str) -> SymbolRecord {
        let mut r = sym(identifier, vec![]);
        r.text = text.to_string();
        r
    }

    fn forest() -> Vec<SymbolRecord> {
        vec![
            sym(
                "a",
                vec![sym("a.1", vec![sym("a.1.x", vec![])]), sym("a.2", vec![])],
            ),
            sym("b", vec![sym("b.1", vec![])]),
        ]
    }

    #[test]
    fn walk_is_pre_order() {
        let order: Vec<_> = walk(&forest())
            .map(|(d, r)| (d, r.moniker.identifier.clone()))
            .collect();
        let expected = [
            (0, "a"),
            (1, "a.1"),
            (2, "a.1.x"),
            (1, "a.2"),
            (0, "b"),
            (1, "b.1"),
        ];
        assert_eq!(order.len(), expected.len());
        for ((d, id), (ed, eid)) in order.iter().zip(expected.iter()) {
            assert_eq!((*d, id.as_str()), (*ed, *eid));
        }
    }

    #[test]
    fn single_root_is_found() {
        let forest = vec![sym("pkg.Foo", vec![])];
        let found = find_symbol(&forest, "go", "pkg.Foo").unwrap();
        assert_eq!(found.moniker.identifier, "pkg.Foo");
    }

    #[test]
    fn nested_child_is_found() {
        let forest = vec![sym("pkg.Foo", vec![sym("pkg.Foo.Bar", vec![])])];
        let found = find_symbol(&forest, "go", "pkg.Foo.Bar").unwrap();
        assert_eq!(found.moniker.identifier, "pkg.Foo.Bar");
        assert!(found.children.is_empty());
    }

    #[test]
    fn grandchild_is_found() {
        let forest = forest();
        assert!(find_symbol(&forest, "go", "a.1.x").is_some());
    }

    #[test]
    fn empty_forest_is_not_found() {
        assert!(find_symbol(&[], "go", "pkg.Foo").is_none());
        assert!(take_symbol(vec![], &MonikerKey::new("go", "pkg.Foo")).is_none());
    }

    #[test]
    fn no_match_is_not_found() {
        let forest = forest();
        assert!(find_symbol(&forest, "go", "zzz").is_none());
        assert!(find_symbol(&forest, "npm", "a").is_none());
    }

    #[test]
    fn fourth_level_is_never_visited() {
        let deep = vec![sym(
            "l0",
            vec![sym("l1", vec![sym("l2", vec![sym("l3", vec![])])])],
        )];
        assert_eq!(walk(&deep).count(), 3);
        assert!(find_symbol(&deep, "go", "l2").is_some());
        assert!(find_symbol(&deep, "go", "l3").is_none());
        assert!(take_symbol(deep, &MonikerKey::new("go", "l3")).is_none());
    }

    #[test]
    fn first_match_in_pre_order_wins() {
        // The duplicate under the first root precedes the second root.
        let forest = vec![
            sym("a", vec![labelled("dup", "nested")]),
            labelled("dup", "root"),
        ];
        assert_eq!(find_symbol(&forest, "go", "dup").unwrap().text, "nested");

        // A parent precedes its own children.
        let forest = vec![sym("x", vec![labelled("x", "child")])];
        assert!(find_symbol(&forest, "go", "x").unwrap().text.is_empty());
    }

    #[test]
    fn borrowed_and_owned_searches_agree() {
        let forest = forest();
        for id in ["a", "a.1", "a.1.x", "a.2", "b", "b.1", "missing"] {
            let key = MonikerKey::new("go", id);
            let borrowed = find_symbol_by_key(&forest, &key).cloned();
            let owned = take_symbol(forest.clone(), &key);
            assert_eq!(borrowed, owned, "disagreement for {id}");
        }
    }

    #[test]
    fn search_is_idempotent() {
        let forest = forest();
        let first = find_symbol(&forest, "go", "b.1").cloned();
        let second = find_symbol(&forest, "go", "b.1").cloned();
        assert_eq!(first, second);
    }
}
