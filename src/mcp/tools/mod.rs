//! Tool implementations organized by domain.
//!
//! Each module exposes a `tools()` registry; [`registry`] concatenates them in
//! the order they are listed to callers.

pub mod godot;
pub mod phaser;
pub mod project;
pub mod unity;

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use super::registry::ToolRegistry;

/// Full tool table, in discovery order.
pub(crate) fn registry() -> ToolRegistry {
    project::tools() + godot::tools() + unity::tools() + phaser::tools()
}

// ============================================================================
// Shared Parameter Types
// ============================================================================

/// Parameters for tools that take no arguments.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Parameters for `*_create_project` tools.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    /// Project name. Embedded verbatim into generated files.
    pub name: String,
}

// ============================================================================
// Shared Response Types
// ============================================================================

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResult {
    pub message: String,
}

impl MessageResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a project scaffold.
#[derive(Debug, Serialize)]
pub struct ProjectCreatedResult {
    pub message: String,
    /// Guidance for finishing the setup outside this tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    /// Commands to run next.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<&'static [&'static str]>,
    /// Files written, relative to the project root.
    pub files_created: Vec<String>,
}

/// Result of a single script scaffold.
#[derive(Debug, Serialize)]
pub struct ScriptCreatedResult {
    pub message: String,
    /// Absolute path of the written script.
    pub path: String,
}
