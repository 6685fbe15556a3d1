//! Godot tools - project scaffold, script templates and editor launch.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use super::{CreateProjectParams, NoParams, ProjectCreatedResult, ScriptCreatedResult};
use crate::context::Context;
use crate::error::AppError;
use crate::mcp::registry::ToolRegistry;
use crate::models::ToolResult;
use crate::scaffold::godot::{self, GodotScriptKind, PROJECT_FILE};
use crate::scaffold::{ScaffoldWriter, SRC_DIR};
use crate::services::launcher;

/// Parameters for godot_create_script tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScriptParams {
    /// Script name, without extension.
    pub name: String,
    /// Template: node, player, enemy, ui or manager. Unknown values use node.
    #[serde(rename = "type", alias = "kind")]
    #[schemars(extend("enum" = ["node", "player", "enemy", "ui", "manager"]))]
    pub kind: String,
}

/// Result of a Godot launch.
#[derive(Debug, Serialize)]
pub struct LaunchResult {
    pub message: &'static str,
    /// The executable that was started.
    pub executable: String,
}

pub(crate) fn tools() -> ToolRegistry {
    ToolRegistry::new()
        .tool(
            "godot_create_project",
            "Create a new Godot 4 project in src/ folder",
            godot_create_project,
        )
        .tool(
            "godot_create_script",
            "Create a new GDScript file with boilerplate",
            godot_create_script,
        )
        .tool(
            "godot_run",
            "Launch the Godot editor on the project in src/",
            godot_run,
        )
}

/// Create a Godot 4 project in `src/`: settings with a platformer input map,
/// a main scene and a game manager script. Existing files are overwritten.
pub async fn godot_create_project(
    ctx: Context,
    params: CreateProjectParams,
) -> Result<ToolResult, AppError> {
    let writer = ctx.resolve::<ScaffoldWriter>();
    let files_created = writer.materialize(&godot::project_plan(&params.name))?;

    tracing::info!(name = %params.name, files = files_created.len(), "Godot project created");
    ToolResult::success(&ProjectCreatedResult {
        message: format!("Created Godot project '{}'", params.name),
        note: None,
        next_steps: None,
        files_created,
    })
}

/// Write `src/scripts/<name>.gd` from the requested template.
pub async fn godot_create_script(
    ctx: Context,
    params: ScriptParams,
) -> Result<ToolResult, AppError> {
    let writer = ctx.resolve::<ScaffoldWriter>();
    let kind = GodotScriptKind::from(params.kind.as_str());
    let written = writer.materialize(&godot::script_plan(&params.name, kind))?;

    let path = written
        .last()
        .map(|relative| writer.absolute(relative).display().to_string())
        .unwrap_or_default();

    ToolResult::success(&ScriptCreatedResult {
        message: format!("Created {} script: {}.gd", params.kind, params.name),
        path,
    })
}

/// Start the first configured Godot executable that exists on this machine.
pub async fn godot_run(ctx: Context, _params: NoParams) -> Result<ToolResult, AppError> {
    if !ctx.root.join(PROJECT_FILE).exists() {
        return Err(AppError::GodotProjectMissing);
    }

    let src_dir = ctx.root.join(SRC_DIR);
    let src = src_dir.display().to_string();
    let candidates = &ctx.config.godot.executables;

    let args = ["--path", src.as_str()];
    let launched =
        launcher::spawn_first(candidates, &args, &src_dir).map_err(|source| AppError::Launch {
            command: format!("godot --path {}", src),
            source,
        })?;

    match launched {
        Some(executable) => ToolResult::success(&LaunchResult {
            message: "Godot launched",
            executable: executable.to_string(),
        }),
        None => {
            tracing::warn!(tried = candidates.len(), "No Godot executable found");
            Err(AppError::GodotNotFound)
        }
    }
}
