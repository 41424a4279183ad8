use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Zero-based line/character position, as reported by the code intelligence API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// One usage site of a symbol: a file at a commit in a repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ReferenceLocation {
    /// Absent when the server could not map the range onto the requested commit.
    pub range: Option<Range>,
    pub repository_name: String,
    pub commit_id: String,
    pub file_path: String,
}

impl ReferenceLocation {
    /// Repository URI in the `git://<repo>?<commit>#<path>` form used by
    /// file-location views.
    pub fn uri(&self) -> String {
        let mut uri = format!("git://{}?{}", self.repository_name, self.commit_id);
        if !self.file_path.is_empty() {
            uri.push('#');
            uri.push_str(&self.file_path);
        }
        uri
    }

    /// `path:line` with a one-based line number, or just the path.
    pub fn short_label(&self) -> String {
        match self.range {
            Some(range) => format!("{}:{}", self.file_path, range.start.line + 1),
            None => self.file_path.clone(),
        }
    }
}
