//! Services behind the tools.
//!
//! Stateful services resolve their dependencies from the context with the
//! `FromContext` derive; the tree renderer and launcher are plain functions
//! of their inputs.

mod documents;
pub mod launcher;
mod shell;
mod tree;

pub use documents::DocumentStore;
pub use shell::{CommandExecutor, CommandOutput};
pub use tree::{TreeRenderer, DENY_SET};
