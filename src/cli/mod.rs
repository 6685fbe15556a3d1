//! CLI module for jamkit.
//!
//! Subcommands:
//! - `mcp`: Run the MCP server (stdio transport, default)
//! - `tree`: Print the project tree
//! - `tools`: Print the tool catalogue
//! - `call`: Invoke a single tool and print its result

mod inspect;
mod mcp;

use clap::{Parser, Subcommand};

/// jamkit - Game Jam Project MCP Server
#[derive(Parser)]
#[command(name = "jamkit")]
#[command(about = "Game jam project scaffolding - MCP server for Godot, Unity and Phaser")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the MCP server (stdio transport)
    Mcp,

    /// Print the project file tree
    Tree,

    /// Print tool descriptors as JSON
    Tools,

    /// Invoke one tool and print its result
    Call {
        /// Tool name
        name: String,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            None | Some(Command::Mcp) => self.run_mcp().await,
            Some(Command::Tree) => self.run_tree(),
            Some(Command::Tools) => self.run_tools(),
            Some(Command::Call { ref name, ref args }) => self.run_call(name, args).await,
        }
    }
}
