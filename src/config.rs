//! Configuration types for the filter pipeline.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`Participants`] - the two sender names kept in the output
//! - [`PipelineConfig`] - input/output locations plus participants
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::{Participants, PipelineConfig};
//!
//! let config = PipelineConfig::new()
//!     .with_input_dir("exports/dm")
//!     .with_output("filtered.json")
//!     .with_participants(Participants::new("Alice", "Bob"));
//!
//! assert!(config.input_path().ends_with("messages.json"));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory of the direct-message export inside an unpacked Google Takeout.
pub const DEFAULT_INPUT_DIR: &str = "extracted_chats/Takeout/Google Chat/Groups/DM 8zeoLgAAAAE";

/// File holding the messages inside an export directory.
pub const MESSAGES_FILE_NAME: &str = "messages.json";

/// Output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "vrunda_chats.json";

/// `creator.user_type` value marking automated senders.
pub const BOT_USER_TYPE: &str = "Bot";

/// Substitute for a missing `creator.name` or `creator.user_type`.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// The two whitelisted senders.
///
/// `owner` is the exporting user and `partner` the other side of the DM.
/// Output records from the partner are flagged (`is_vrunda` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    /// First whitelisted name.
    pub owner: String,
    /// Second whitelisted name; messages from this sender are flagged.
    pub partner: String,
}

impl Default for Participants {
    fn default() -> Self {
        Self::new("Harshiv Gajjar", "Vrunda Mundhra")
    }
}

impl Participants {
    pub fn new(owner: impl Into<String>, partner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            partner: partner.into(),
        }
    }

    /// Returns `true` if `name` is exactly one of the two participants.
    ///
    /// Matching is case-sensitive and does not trim whitespace.
    pub fn contains(&self, name: &str) -> bool {
        name == self.owner || name == self.partner
    }

    /// Returns `true` if `name` is exactly the partner's name.
    pub fn is_partner(&self, name: &str) -> bool {
        name == self.partner
    }
}

/// Where to read the export, where to write the result, and whom to keep.
///
/// # Example
///
/// ```rust
/// use chatsift::config::{PipelineConfig, DEFAULT_OUTPUT};
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.output.to_str(), Some(DEFAULT_OUTPUT));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory containing the export (default: [`DEFAULT_INPUT_DIR`])
    pub input_dir: PathBuf,

    /// File name inside `input_dir` (default: [`MESSAGES_FILE_NAME`])
    pub input_file: String,

    /// Output file path (default: [`DEFAULT_OUTPUT`])
    pub output: PathBuf,

    /// Whitelisted senders (default: [`Participants::default`])
    pub participants: Participants,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            input_file: MESSAGES_FILE_NAME.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            participants: Participants::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the export directory.
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Sets the output file path.
    #[must_use]
    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    /// Sets the whitelisted participants.
    #[must_use]
    pub fn with_participants(mut self, participants: Participants) -> Self {
        self.participants = participants;
        self
    }

    /// Full path of the messages file.
    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_file)
    }
}
