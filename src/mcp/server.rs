//! MCP server implementation for jamkit.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use serde_json::Value;

use super::registry::Dispatcher;
use crate::context::Context;
use crate::models::ToolRequest;

/// jamkit MCP server for game jam project scaffolding.
///
/// Tools are served from the static registry; every call goes through the
/// [`Dispatcher`], which runs them one at a time; its JSON result becomes a
/// single text content block.
#[derive(Clone)]
pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new jamkit MCP server with the given context.
    pub fn new(ctx: Context) -> Self {
        tracing::info!(root = %ctx.root.path().display(), "Initializing jamkit MCP server");

        Self {
            dispatcher: Dispatcher::new(ctx),
        }
    }

    /// Tool list in the shape MCP clients expect.
    fn tools(&self) -> Vec<Tool> {
        self.dispatcher
            .list()
            .into_iter()
            .map(|d| Tool::new(d.name, d.description, d.input_schema.clone()))
            .collect()
    }
}

// ============================================================================
// Server Handler
// ============================================================================

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                r#"jamkit - Game Jam Project MCP Server

Scaffolds and drives Godot, Unity and Phaser projects under src/.

## Project Tools

- **project_structure** - File tree of the project
- **project_todo** - Read, write or append to docs/TASKS.md
- **project_design** - Read or write docs/GAME_DESIGN.md
- **run_command** - Run a shell command in the project (60s timeout)

## Engine Tools

- **godot_create_project** / **godot_create_script** / **godot_run**
- **unity_create_project** / **unity_create_script**
- **phaser_create_project** / **phaser_dev_server**

Every tool answers with a JSON object carrying `success` and, on failure, `error`.
"#
                .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        let result = self
            .dispatcher
            .invoke(ToolRequest::new(request.name, arguments))
            .await;

        let content = vec![Content::text(result.to_pretty_json())];
        Ok(if result.success {
            CallToolResult::success(content)
        } else {
            CallToolResult::error(content)
        })
    }
}
