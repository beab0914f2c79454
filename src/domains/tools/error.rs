//! Tool-specific error types.

use thiserror::Error;

use crate::core::filesystem::FsError;

/// Errors that can occur while registering or running tools.
///
/// Only `DuplicateName` ever escapes to the caller: it is raised while the
/// registry is built at startup. Every other variant is turned into a text
/// outcome by the dispatcher. Argument validation failures have their own
/// type, [`ValidationError`](super::ValidationError).
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool with this name is already registered.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The filesystem driver failed.
    #[error(transparent)]
    Filesystem(#[from] FsError),

    /// The result could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The handler panicked.
    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl ToolError {
    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "panicked" error.
    pub fn panicked(msg: impl Into<String>) -> Self {
        Self::Panicked(msg.into())
    }
}
