//! Read/write/append for the task list and the design document.

use std::fs;
use std::io::ErrorKind;

use crate::context::{Context, ProjectRoot};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::DocumentKey;

/// File-backed store for the two project documents under `docs/`.
///
/// Content is opaque text. There is no locking; requests are served one at
/// a time.
#[derive(FromContext, Clone)]
pub struct DocumentStore {
    root: ProjectRoot,
}

impl DocumentStore {
    pub fn new(root: ProjectRoot) -> Self {
        Self { root }
    }

    /// Current content, or `DocumentNotFound` if never written.
    pub fn read(&self, key: DocumentKey) -> Result<String, AppError> {
        let path = self.root.join(key.relative_path());
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::DocumentNotFound(key.file_name()))
            }
            Err(e) => Err(AppError::io(path, e)),
        }
    }

    /// Overwrite the document, creating `docs/` if needed.
    pub fn write(&self, key: DocumentKey, content: &str) -> Result<(), AppError> {
        let path = self.root.join(key.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        fs::write(&path, content).map_err(|e| AppError::io(&path, e))?;

        tracing::debug!(document = %key, bytes = content.len(), "Document written");
        Ok(())
    }

    /// Append to the task list, separated from existing content by a newline.
    pub fn append_task(&self, content: &str) -> Result<(), AppError> {
        let existing = match self.read(DocumentKey::Tasks) {
            Ok(existing) => existing,
            Err(AppError::DocumentNotFound(_)) => String::new(),
            Err(e) => return Err(e),
        };
        self.write(DocumentKey::Tasks, &format!("{}\n{}", existing, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(ProjectRoot::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn test_read_missing_document() {
        let (_dir, store) = store();
        let err = store.read(DocumentKey::Design).unwrap_err();
        assert_eq!(err.to_string(), "GAME_DESIGN.md not found");
    }

    #[test]
    fn test_write_creates_docs_directory() {
        let (dir, store) = store();
        store.write(DocumentKey::Design, "# Pitch").unwrap();

        assert!(dir.path().join("docs/GAME_DESIGN.md").is_file());
        assert_eq!(store.read(DocumentKey::Design).unwrap(), "# Pitch");
    }

    #[test]
    fn test_write_overwrites() {
        let (_dir, store) = store();
        store.write(DocumentKey::Tasks, "old").unwrap();
        store.write(DocumentKey::Tasks, "new").unwrap();
        assert_eq!(store.read(DocumentKey::Tasks).unwrap(), "new");
    }

    #[test]
    fn test_append_keeps_prefix() {
        let (_dir, store) = store();
        store.write(DocumentKey::Tasks, "# Tasks").unwrap();
        store.append_task("- [ ] jump").unwrap();
        store.append_task("- [ ] enemies").unwrap();

        assert_eq!(
            store.read(DocumentKey::Tasks).unwrap(),
            "# Tasks\n- [ ] jump\n- [ ] enemies"
        );
    }

    #[test]
    fn test_append_to_missing_document() {
        let (_dir, store) = store();
        store.append_task("first").unwrap();
        assert_eq!(store.read(DocumentKey::Tasks).unwrap(), "\nfirst");
    }
}
