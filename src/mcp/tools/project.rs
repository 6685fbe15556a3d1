//! Project tools - file tree, living documents and shell access.

use std::path::PathBuf;

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use super::{MessageResult, NoParams};
use crate::context::Context;
use crate::error::AppError;
use crate::mcp::registry::ToolRegistry;
use crate::models::{DocumentKey, ToolResult};
use crate::services::{CommandExecutor, DocumentStore, TreeRenderer};

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TodoAction {
    Read,
    Write,
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DesignAction {
    Read,
    Write,
}

/// Parameters for project_todo tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TodoParams {
    pub action: TodoAction,
    /// Content to write (for write/append).
    #[serde(default)]
    pub content: Option<String>,
}

/// Parameters for project_design tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DesignParams {
    pub action: DesignAction,
    /// Content to write.
    #[serde(default)]
    pub content: Option<String>,
}

/// Parameters for run_command tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RunCommandParams {
    /// The command to run. Shell syntax such as pipes is supported.
    pub command: String,
    /// Working directory, relative to the project root. Defaults to the root.
    #[serde(default)]
    pub cwd: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Rendered project tree.
#[derive(Debug, Serialize)]
pub struct TreeResult {
    pub tree: String,
}

/// Document content.
#[derive(Debug, Serialize)]
pub struct ContentResult {
    pub content: String,
}

// ============================================================================
// Tool Router
// ============================================================================

pub(crate) fn tools() -> ToolRegistry {
    ToolRegistry::new()
        .tool(
            "project_structure",
            "Get the current project file/folder structure as a tree",
            project_structure,
        )
        .tool(
            "project_todo",
            "Read or update the TASKS.md file",
            project_todo,
        )
        .tool(
            "project_design",
            "Read or update the GAME_DESIGN.md file",
            project_design,
        )
        .tool(
            "run_command",
            "Execute a shell command in the project directory (60s timeout)",
            run_command,
        )
}

/// Render the project tree, skipping VCS, dependency and engine caches.
pub async fn project_structure(ctx: Context, _params: NoParams) -> Result<ToolResult, AppError> {
    let tree = TreeRenderer::default().render_with_header(&ctx.root.display_name(), ctx.root.path())?;

    tracing::info!(lines = tree.lines().count(), "Project tree rendered");
    ToolResult::success(&TreeResult { tree })
}

/// Read, overwrite or append to the task list.
pub async fn project_todo(ctx: Context, params: TodoParams) -> Result<ToolResult, AppError> {
    let store = ctx.resolve::<DocumentStore>();
    let content = params.content.unwrap_or_default();

    match params.action {
        TodoAction::Read => ToolResult::success(&ContentResult {
            content: store.read(DocumentKey::Tasks)?,
        }),
        TodoAction::Write => {
            store.write(DocumentKey::Tasks, &content)?;
            ToolResult::success(&MessageResult::new("TASKS.md updated"))
        }
        TodoAction::Append => {
            store.append_task(&content)?;
            ToolResult::success(&MessageResult::new("Appended to TASKS.md"))
        }
    }
}

/// Read or overwrite the design document.
pub async fn project_design(ctx: Context, params: DesignParams) -> Result<ToolResult, AppError> {
    let store = ctx.resolve::<DocumentStore>();

    match params.action {
        DesignAction::Read => ToolResult::success(&ContentResult {
            content: store.read(DocumentKey::Design)?,
        }),
        DesignAction::Write => {
            store.write(DocumentKey::Design, &params.content.unwrap_or_default())?;
            ToolResult::success(&MessageResult::new("GAME_DESIGN.md updated"))
        }
    }
}

/// Run a shell command. A non-zero exit is reported, not raised.
pub async fn run_command(ctx: Context, params: RunCommandParams) -> Result<ToolResult, AppError> {
    tracing::info!(command = %params.command, cwd = ?params.cwd, "Running run_command tool");

    let executor = ctx.resolve::<CommandExecutor>();
    let cwd = params.cwd.map(PathBuf::from);
    let output = executor.run(&params.command, cwd.as_deref()).await?;

    tracing::info!(returncode = output.returncode, "Command finished");
    ToolResult::reported(output.succeeded(), &output)
}
