//! Directory tree rendering for `project_structure`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Directory names never descended into or listed, at any depth.
///
/// Version control metadata, dependency caches and engine build caches.
pub const DENY_SET: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".godot",
    "Library",
    "Temp",
    "Logs",
];

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

/// Renders a filesystem subtree as ASCII connector lines.
///
/// Within each directory, subdirectories come first, then files, each group
/// sorted by name. Directory symlinks are followed and there is no depth cap
/// or cycle guard: a symlink loop recurses until the filesystem refuses.
#[derive(Debug, Clone, Copy)]
pub struct TreeRenderer {
    deny: &'static [&'static str],
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new(DENY_SET)
    }
}

impl TreeRenderer {
    pub fn new(deny: &'static [&'static str]) -> Self {
        Self { deny }
    }

    /// Lines for everything below `root`, without a header line.
    ///
    /// Any read error aborts the whole render.
    pub fn render(&self, root: &Path) -> Result<Vec<String>, AppError> {
        let mut lines = Vec::new();
        self.walk(root, "", &mut lines)?;
        Ok(lines)
    }

    /// Full listing: `<name>/` followed by [`render`](Self::render) output.
    pub fn render_with_header(&self, name: &str, root: &Path) -> Result<String, AppError> {
        let mut lines = vec![format!("{}/", name)];
        lines.extend(self.render(root)?);
        Ok(lines.join("\n"))
    }

    fn walk(&self, dir: &Path, prefix: &str, lines: &mut Vec<String>) -> Result<(), AppError> {
        let entries = self.sorted_entries(dir)?;
        let count = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            lines.push(format!("{}{}{}", prefix, connector, entry.name));

            if entry.is_dir {
                let extension = if is_last { GAP } else { PIPE };
                self.walk(&entry.path, &format!("{}{}", prefix, extension), lines)?;
            }
        }

        Ok(())
    }

    fn sorted_entries(&self, dir: &Path) -> Result<Vec<Entry>, AppError> {
        let mut entries = Vec::new();

        for item in fs::read_dir(dir).map_err(|e| AppError::io(dir, e))? {
            let item = item.map_err(|e| AppError::io(dir, e))?;
            let name = item.file_name().to_string_lossy().into_owned();
            if self.deny.contains(&name.as_str()) {
                continue;
            }
            let path = item.path();
            entries.push(Entry {
                is_dir: path.is_dir(),
                name,
                path,
            });
        }

        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }
}

struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}
