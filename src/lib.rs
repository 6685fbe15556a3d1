//! jamkit - Game Jam Project MCP Server
//!
//! Project scaffolding, living design documents and shell access for Godot,
//! Unity and Phaser jams, exposed as MCP tools.

pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod mcp;
pub mod models;
pub mod scaffold;
pub mod services;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
