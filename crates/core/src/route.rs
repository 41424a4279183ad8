//! Links to symbol pages, in the form the web app routes them.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use symscope_api::{Moniker, MonikerKey, SymbolRecord};

/// Path segment that introduces a moniker route below a repository revision.
pub const SYMBOLS_ROUTE: &str = "/-/symbols/";

/// Characters escaped in one path segment: everything except unreserved
/// characters and `$&+:=@`. `/` is escaped too.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Percent-encodes one path segment the way Go's `url.PathEscape` does.
pub fn escape_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// `<prefix>/-/symbols/<scheme>/<identifier>`, with slashes in the
/// identifier left readable. `None` for monikers without a scheme.
pub fn symbol_route(repo_rev_prefix: &str, moniker: &Moniker) -> Option<String> {
    if moniker.scheme.is_empty() {
        return None;
    }
    Some(format!(
        "{}{}{}/{}",
        repo_rev_prefix.trim_end_matches('/'),
        SYMBOLS_ROUTE,
        escape_path_segment(&moniker.scheme),
        escape_path_segment(&moniker.identifier).replace("%2F", "/")
    ))
}

/// `<prefix>/-/blob/<path>#L<start>-<end>` for the record's definition site,
/// with one-based lines.
pub fn definition_route(repo_rev_prefix: &str, record: &SymbolRecord) -> Option<String> {
    let definition = record.definition()?;
    let mut route = format!(
        "{}/-/blob/{}",
        repo_rev_prefix.trim_end_matches('/'),
        definition.file_path.trim_start_matches('/')
    );
    if let Some(range) = definition.range {
        route.push_str(&format!("#L{}-{}", range.start.line + 1, range.end.line + 1));
    }
    Some(route)
}

/// Best link for a record: its moniker route, else its definition site.
pub fn symbol_link(repo_rev_prefix: &str, record: &SymbolRecord) -> Option<String> {
    symbol_route(repo_rev_prefix, &record.moniker)
        .or_else(|| definition_route(repo_rev_prefix, record))
}

/// Extracts the moniker from a path containing `/-/symbols/<scheme>/<identifier>`.
pub fn parse_symbol_route(path: &str) -> Option<MonikerKey> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let (_, rest) = path.split_once(SYMBOLS_ROUTE)?;
    let (scheme, identifier) = rest.split_once('/')?;
    if scheme.is_empty() || identifier.is_empty() {
        return None;
    }

    let scheme = urlencoding::decode(scheme).ok()?;
    let identifier = urlencoding::decode(identifier).ok()?;
    Some(MonikerKey::new(scheme.into_owned(), identifier.into_owned()))
}
