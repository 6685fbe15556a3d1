//! Domain models shared by the dispatcher and the services.

mod document;
mod tool;

pub use document::DocumentKey;
pub use tool::{ToolDescriptor, ToolRequest, ToolResult};
