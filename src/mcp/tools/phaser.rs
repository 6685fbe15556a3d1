//! Phaser tools - Vite project scaffold and dev server.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use super::{CreateProjectParams, MessageResult, ProjectCreatedResult};
use crate::context::Context;
use crate::error::AppError;
use crate::mcp::registry::ToolRegistry;
use crate::models::ToolResult;
use crate::scaffold::phaser::{self, NEXT_STEPS};
use crate::scaffold::ScaffoldWriter;
use crate::services::launcher;

#[cfg(windows)]
const NPM: &str = "npm.cmd";
#[cfg(not(windows))]
const NPM: &str = "npm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DevServerAction {
    Start,
    Stop,
    Status,
}

/// Parameters for phaser_dev_server tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DevServerParams {
    pub action: DevServerAction,
}

/// Result of starting the dev server.
#[derive(Debug, Serialize)]
pub struct DevServerStarted {
    pub message: &'static str,
    pub url: String,
}

pub(crate) fn tools() -> ToolRegistry {
    ToolRegistry::new()
        .tool(
            "phaser_create_project",
            "Create a new Phaser 3 + Vite project",
            phaser_create_project,
        )
        .tool(
            "phaser_dev_server",
            "Start/stop the Phaser dev server",
            phaser_dev_server,
        )
}

/// Create a Phaser 3 + Vite project in `src/` with one arcade-physics scene.
pub async fn phaser_create_project(
    ctx: Context,
    params: CreateProjectParams,
) -> Result<ToolResult, AppError> {
    let plan = phaser::project_plan(&params.name)?;
    let files_created = ctx.resolve::<ScaffoldWriter>().materialize(&plan)?;

    tracing::info!(name = %params.name, files = files_created.len(), "Phaser project created");
    ToolResult::success(&ProjectCreatedResult {
        message: format!("Created Phaser project '{}'", params.name),
        note: None,
        next_steps: Some(NEXT_STEPS),
        files_created,
    })
}

/// Start launches `npm run dev` detached; the server is not tracked, so
/// status and stop only point the caller at the terminal.
pub async fn phaser_dev_server(
    ctx: Context,
    params: DevServerParams,
) -> Result<ToolResult, AppError> {
    match params.action {
        DevServerAction::Start => {
            let dir = phaser::dev_server_dir(&ctx.root)?;
            launcher::spawn_detached(NPM, &["run", "dev"], &dir).map_err(|source| {
                AppError::Launch {
                    command: "npm run dev".to_string(),
                    source,
                }
            })?;

            ToolResult::success(&DevServerStarted {
                message: "Dev server starting...",
                url: ctx.config.phaser.dev_url.clone(),
            })
        }
        DevServerAction::Status => {
            ToolResult::success(&MessageResult::new("Check terminal for server status"))
        }
        DevServerAction::Stop => {
            ToolResult::success(&MessageResult::new("Stop the server with Ctrl+C in terminal"))
        }
    }
}
