//! One-shot commands that run against the project without a client.

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde_json::Value;

use crate::context::Context;
use crate::mcp::Dispatcher;
use crate::models::ToolRequest;
use crate::services::TreeRenderer;

use super::App;

impl App {
    /// Print the project tree to stdout.
    pub fn run_tree(&self) -> Result<()> {
        let ctx = Context::from_environment()?;
        let tree = TreeRenderer::default()
            .render_with_header(&ctx.root.display_name(), ctx.root.path())?;
        println!("{}", tree);
        Ok(())
    }

    /// Print every tool descriptor as pretty JSON.
    pub fn run_tools(&self) -> Result<()> {
        let dispatcher = Dispatcher::new(Context::from_environment()?);
        println!("{}", serde_json::to_string_pretty(&dispatcher.list())?);
        Ok(())
    }

    /// Invoke one tool and print its result. Exits non-zero on failure.
    pub async fn run_call(&self, name: &str, args: &str) -> Result<()> {
        let arguments: Value = serde_json::from_str(args)
            .wrap_err_with(|| format!("Arguments for {} are not valid JSON", name))?;

        let dispatcher = Dispatcher::new(Context::from_environment()?);
        let result = dispatcher.invoke(ToolRequest::new(name, arguments)).await;
        println!("{}", result.to_pretty_json());

        if result.success {
            Ok(())
        } else {
            Err(eyre!("Tool {} reported failure", name))
        }
    }
}
