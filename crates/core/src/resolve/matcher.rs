use symscope_api::{MonikerKey, SymbolRecord};

/// True iff the record's moniker has exactly this scheme and identifier.
pub fn matches(record: &SymbolRecord, scheme: &str, identifier: &str) -> bool {
    record.moniker.scheme == scheme && record.moniker.identifier == identifier
}

pub fn matches_key(record: &SymbolRecord, key: &MonikerKey) -> bool {
    matches(record, &key.scheme, &key.identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symscope_api::Moniker;

    fn record(kind: &str, scheme: &str, identifier: &str) -> SymbolRecord {
        SymbolRecord::new(Moniker::new(kind, scheme, identifier))
    }

    #[test]
    fn exact_match() {
        assert!(matches(&record("export", "go", "pkg.Foo"), "go", "pkg.Foo"));
    }

    #[test]
    fn kind_is_ignored() {
        let key = MonikerKey::new("go", "pkg.Foo");
        assert!(matches_key(&record("import", "go", "pkg.Foo"), &key));
        assert!(matches_key(&record("", "go", "pkg.Foo"), &key));
    }

    #[test]
    fn scheme_and_identifier_must_both_match() {
        let r = record("export", "go", "pkg.Foo");
        assert!(!matches(&r, "npm", "pkg.Foo"));
        assert!(!matches(&r, "go", "pkg.foo"));
        assert!(!matches(&r, "go", "pkg.Foo.Bar"));
        assert!(!matches(&r, "", ""));
    }
}
