//! Ordered scaffold plans and the writer that materializes them.

use std::fs;
use std::path::PathBuf;

use crate::context::{Context, ProjectRoot};
use crate::di::FromContext;
use crate::error::AppError;

/// One step of a scaffold plan. Paths are relative to the project root and
/// always use `/` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    /// Ensure a directory exists (idempotent).
    Directory(String),
    /// Write a file, replacing any previous content.
    File { path: String, content: String },
}

impl PlanEntry {
    pub fn path(&self) -> &str {
        match self {
            PlanEntry::Directory(path) => path,
            PlanEntry::File { path, .. } => path,
        }
    }
}

/// Everything a generator intends to create, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldPlan {
    entries: Vec<PlanEntry>,
}

impl ScaffoldPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, path: impl Into<String>) -> Self {
        self.entries.push(PlanEntry::Directory(path.into()));
        self
    }

    pub fn file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.entries.push(PlanEntry::File {
            path: path.into(),
            content: content.into(),
        });
        self
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Relative paths of the files in the plan, in write order.
    pub fn files(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                PlanEntry::File { path, .. } => Some(path.clone()),
                PlanEntry::Directory(_) => None,
            })
            .collect()
    }

    /// Content planned for `path`, if the plan writes that file.
    pub fn content_of(&self, path: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            PlanEntry::File { path: p, content } if p == path => Some(content.as_str()),
            _ => None,
        })
    }
}

/// Writes scaffold plans under the project root.
///
/// Entries are applied one after another. There is no rollback: a failure
/// part-way leaves the earlier entries on disk, and re-running the same plan
/// repairs the tree.
#[derive(FromContext, Clone)]
pub struct ScaffoldWriter {
    root: ProjectRoot,
}

impl ScaffoldWriter {
    pub fn new(root: ProjectRoot) -> Self {
        Self { root }
    }

    /// Apply `plan` and return the files it wrote.
    pub fn materialize(&self, plan: &ScaffoldPlan) -> Result<Vec<String>, AppError> {
        for entry in plan.entries() {
            let target = self.absolute(entry.path());
            match entry {
                PlanEntry::Directory(_) => {
                    fs::create_dir_all(&target).map_err(|e| AppError::io(&target, e))?;
                }
                PlanEntry::File { content, .. } => {
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
                    }
                    fs::write(&target, content).map_err(|e| AppError::io(&target, e))?;
                }
            }
            tracing::debug!(path = %entry.path(), "Scaffold entry applied");
        }

        Ok(plan.files())
    }

    /// Absolute location of a plan path.
    pub fn absolute(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
