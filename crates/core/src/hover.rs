use symscope_api::SymbolRecord;

/// Separates the signature block from the documentation in hover markdown.
pub const HOVER_SEPARATOR: &str = "---";

/// Hover markdown split into its signature and documentation segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverParts<'a> {
    pub signature: Option<&'a str>,
    pub documentation: Option<&'a str>,
}

impl<'a> HoverParts<'a> {
    /// Only the first two segments are kept; a third `---` and anything after
    /// it is dropped. Blank segments are reported as absent.
    pub fn parse(markdown: &'a str) -> Self {
        let mut segments = markdown
            .split(HOVER_SEPARATOR)
            .take(2)
            .map(str::trim)
            .map(|s| (!s.is_empty()).then_some(s));

        Self {
            signature: segments.next().flatten(),
            documentation: segments.next().flatten(),
        }
    }

    pub fn of(record: &'a SymbolRecord) -> Self {
        record
            .hover_markdown
            .as_deref()
            .map(Self::parse)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.signature.is_none() && self.documentation.is_none()
    }
}
