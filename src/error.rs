//! Application error types with tool result conversion.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ToolResult;

/// Application-level errors for jamkit.
#[derive(Error, Debug)]
pub enum AppError {
    // Dispatch errors
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("Tool {0} panicked")]
    Panicked(String),

    // Filesystem errors
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} not found")]
    DocumentNotFound(&'static str),

    // Subprocess errors
    #[error("Command timed out after {0}s")]
    Timeout(u64),

    #[error("Failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Engine preconditions
    #[error("No Godot project found in src/")]
    GodotProjectMissing,

    #[error("Godot not found. Install Godot 4 and add to PATH, or open project manually.")]
    GodotNotFound,

    #[error("No Phaser project found. Run phaser_create_project first.")]
    PhaserProjectMissing,

    #[error("Dependencies not installed. Run: cd src && npm install")]
    DependenciesMissing,

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnknownTool(_) => "UNKNOWN_TOOL",
            AppError::InvalidArguments { .. } => "INVALID_ARGUMENTS",
            AppError::Panicked(_) => "TOOL_PANICKED",
            AppError::Io { .. } => "IO_ERROR",
            AppError::DocumentNotFound(_) => "DOCUMENT_NOT_FOUND",
            AppError::Timeout(_) => "COMMAND_TIMEOUT",
            AppError::Launch { .. } => "LAUNCH_FAILED",
            AppError::GodotProjectMissing => "GODOT_PROJECT_MISSING",
            AppError::GodotNotFound => "GODOT_NOT_FOUND",
            AppError::PhaserProjectMissing => "PHASER_PROJECT_MISSING",
            AppError::DependenciesMissing => "DEPENDENCIES_MISSING",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl From<AppError> for ToolResult {
    fn from(err: AppError) -> Self {
        ToolResult::failure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_message() {
        let result = ToolResult::from(AppError::UnknownTool("fly".to_string()));
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Unknown tool: fly"));
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = AppError::io(
            "/tmp/x/docs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.code(), "IO_ERROR");
        assert_eq!(err.to_string(), "/tmp/x/docs: denied");
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(AppError::Timeout(60).to_string(), "Command timed out after 60s");
    }
}
