//! Unity tools - folder layout and C# script templates.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

use super::{CreateProjectParams, ProjectCreatedResult, ScriptCreatedResult};
use crate::context::Context;
use crate::error::AppError;
use crate::mcp::registry::ToolRegistry;
use crate::models::ToolResult;
use crate::scaffold::unity::{self, UnityScriptKind, OPEN_NOTE};
use crate::scaffold::ScaffoldWriter;

/// Parameters for unity_create_script tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScriptParams {
    /// Script and class name, without extension.
    pub name: String,
    /// Template: monobehaviour, scriptableobject or manager. Unknown values
    /// use monobehaviour.
    #[serde(rename = "type", alias = "kind")]
    #[schemars(extend("enum" = ["monobehaviour", "scriptableobject", "manager"]))]
    pub kind: String,
}

pub(crate) fn tools() -> ToolRegistry {
    ToolRegistry::new()
        .tool(
            "unity_create_project",
            "Create Unity project folder structure (requires Unity Hub to finalize)",
            unity_create_project,
        )
        .tool(
            "unity_create_script",
            "Create a new C# script with boilerplate",
            unity_create_script,
        )
}

/// Lay out `src/Assets/` with a game manager and a player controller. The
/// Unity project itself must be created through Unity Hub.
pub async fn unity_create_project(
    ctx: Context,
    params: CreateProjectParams,
) -> Result<ToolResult, AppError> {
    let files_created = ctx
        .resolve::<ScaffoldWriter>()
        .materialize(&unity::project_plan(&params.name))?;

    tracing::info!(name = %params.name, files = files_created.len(), "Unity layout created");
    ToolResult::success(&ProjectCreatedResult {
        message: format!("Created Unity project structure for '{}'", params.name),
        note: Some(OPEN_NOTE),
        next_steps: None,
        files_created,
    })
}

/// Write `src/Assets/Scripts/<name>.cs` declaring class `<name>`.
pub async fn unity_create_script(
    ctx: Context,
    params: ScriptParams,
) -> Result<ToolResult, AppError> {
    let writer = ctx.resolve::<ScaffoldWriter>();
    let kind = UnityScriptKind::from(params.kind.as_str());
    let written = writer.materialize(&unity::script_plan(&params.name, kind))?;

    let path = written
        .last()
        .map(|relative| writer.absolute(relative).display().to_string())
        .unwrap_or_default();

    ToolResult::success(&ScriptCreatedResult {
        message: format!("Created {} script: {}.cs", params.kind, params.name),
        path,
    })
}
