//! Unified error types for chatsift.
//!
//! A single [`ChatsiftError`] enum covers every failure the pipeline can
//! surface. A missing input file is *not* an error: the loader reports it as
//! an absent export and the pipeline carries on with an empty message list.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::FilteredMessage;
///
/// fn my_function() -> Result<Vec<FilteredMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file exists but cannot be read
    /// - Permission denied on the output path
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export document is not valid JSON, or does not have the
    /// expected shape.
    #[error("Failed to parse Google Chat export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// JSON serialization error while producing output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatsiftError {
    /// Creates a parse error for a Google Chat export.
    pub fn parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatsiftError::Parse { source, path }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatsiftError::Parse { .. })
    }
}
