//! Model Context Protocol (MCP) server implementation for jamkit.
//!
//! ## Architecture
//!
//! Tools live in a closed, ordered registry built once per process. The
//! `Dispatcher` routes requests by name and resolves services from the
//! `Context` through `FromRef` at call time.
//!
//! ## Modules
//!
//! - `registry`: tool table and dispatcher
//! - `server`: MCP server handler over the dispatcher
//! - `tools`: Tool implementations organized by domain

mod registry;
pub(crate) mod server;
mod tools;

pub use registry::{Dispatcher, ToolRegistry};
pub use server::McpServer;
