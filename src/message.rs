//! Normalized output message.
//!
//! [`FilteredMessage`] is what the pipeline writes: one record per kept
//! message, in export order.
//!
//! # Serialization
//!
//! Field names and order are fixed because downstream viewers read them:
//!
//! ```
//! use chatsift::FilteredMessage;
//!
//! let msg = FilteredMessage::new("hi", "Vrunda Mundhra", "t1", true);
//! let json = serde_json::to_string(&msg)?;
//!
//! assert_eq!(
//!     json,
//!     r#"{"text":"hi","sender":"Vrunda Mundhra","timestamp":"t1","is_vrunda":true}"#
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// A message from one of the two whitelisted participants.
///
/// | Field | Wire name | Source |
/// |-------|-----------|--------|
/// | `text` | `text` | `text`, verbatim |
/// | `sender` | `sender` | `creator.name`, verbatim |
/// | `timestamp` | `timestamp` | `created_date`, verbatim and unparsed |
/// | `is_partner` | `is_vrunda` | `sender == partner` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredMessage {
    /// Message text. May be empty.
    pub text: String,

    /// Author display name.
    pub sender: String,

    /// Creation time exactly as exported, e.g. `"Monday, 3 June 2024 at 10:15:02 UTC"`.
    pub timestamp: String,

    /// Whether the sender is the partner participant.
    #[serde(rename = "is_vrunda")]
    pub is_partner: bool,
}

impl FilteredMessage {
    pub fn new(
        text: impl Into<String>,
        sender: impl Into<String>,
        timestamp: impl Into<String>,
        is_partner: bool,
    ) -> Self {
        Self {
            text: text.into(),
            sender: sender.into(),
            timestamp: timestamp.into(),
            is_partner,
        }
    }
}
