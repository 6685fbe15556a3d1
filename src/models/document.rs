//! The two living project documents.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory (relative to the project root) holding both documents.
pub const DOCS_DIR: &str = "docs";

/// Identity of one of the fixed project documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKey {
    /// Running task list, the only document that supports append.
    Tasks,
    /// Game design document.
    Design,
}

impl DocumentKey {
    /// File name inside [`DOCS_DIR`].
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentKey::Tasks => "TASKS.md",
            DocumentKey::Design => "GAME_DESIGN.md",
        }
    }

    /// Path relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(DOCS_DIR).join(self.file_name())
    }
}

impl std::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}
