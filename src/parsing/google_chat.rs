//! Google Chat (Takeout) export records.
//!
//! A Takeout `messages.json` looks like this:
//!
//! ```json
//! {
//!   "messages": [
//!     {
//!       "creator": {
//!         "name": "Vrunda Mundhra",
//!         "email": "vrunda@example.com",
//!         "user_type": "Human"
//!       },
//!       "created_date": "Monday, 3 June 2024 at 10:15:02 UTC",
//!       "text": "hi",
//!       "topic_id": "abc123"
//!     }
//!   ]
//! }
//! ```
//!
//! Every field can be missing. The wire structs keep them as `Option` and
//! [`RawMessage::from`] substitutes the defaults in one place. A field that is
//! present but `null` gets the same default as a missing one, so a `null`
//! text or date is written out as `""`, not copied through as `null`.
//!
//! The document itself must be a JSON object. If `messages` appears more than
//! once, the last occurrence wins.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::UNKNOWN_FIELD;

/// Top-level export document.
#[derive(Debug, Default, Deserialize)]
pub struct GoogleChatExport {
    /// Absent when the conversation has no messages.
    pub messages: Option<Vec<GoogleChatRawMessage>>,
}

impl GoogleChatExport {
    /// Parses an export document, rejecting anything that is not an object.
    ///
    /// Going through a [`Map`] first keeps serde from accepting the sequence
    /// form of the struct (`[[...]]`) and lets a repeated key overwrite.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(content)?;
        serde_json::from_value(Value::Object(object))
    }

    /// Resolves every record, keeping export order.
    pub fn into_messages(self) -> Vec<RawMessage> {
        self.messages
            .unwrap_or_default()
            .into_iter()
            .map(RawMessage::from)
            .collect()
    }
}

/// One element of `messages`, as exported.
#[derive(Debug, Default, Deserialize)]
pub struct GoogleChatRawMessage {
    /// Message text
    pub text: Option<String>,
    /// Author block
    pub creator: Option<GoogleChatCreator>,
    /// Human-readable creation time
    pub created_date: Option<String>,
}

/// The `creator` block of a message.
#[derive(Debug, Default, Deserialize)]
pub struct GoogleChatCreator {
    /// Display name
    pub name: Option<String>,
    /// `"Human"` or `"Bot"`
    pub user_type: Option<String>,
}

/// A message record with every default already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub text: String,
    pub name: String,
    pub user_type: String,
    pub created_date: String,
}

impl RawMessage {
    pub fn new(
        text: impl Into<String>,
        name: impl Into<String>,
        user_type: impl Into<String>,
        created_date: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
            user_type: user_type.into(),
            created_date: created_date.into(),
        }
    }
}

impl From<GoogleChatRawMessage> for RawMessage {
    fn from(msg: GoogleChatRawMessage) -> Self {
        let creator = msg.creator.unwrap_or_default();
        Self {
            text: msg.text.unwrap_or_default(),
            name: creator.name.unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            user_type: creator.user_type.unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
            created_date: msg.created_date.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<RawMessage> {
        GoogleChatExport::from_json(json).unwrap().into_messages()
    }

    #[test]
    fn test_resolve_full_record() {
        let messages = parse(
            r#"{"messages": [{"text": "hi", "creator": {"name": "Vrunda Mundhra", "email": "v@example.com", "user_type": "Human"}, "created_date": "t1", "topic_id": "x"}]}"#,
        );
        assert_eq!(
            messages,
            vec![RawMessage::new("hi", "Vrunda Mundhra", "Human", "t1")]
        );
    }

    #[test]
    fn test_resolve_empty_record() {
        let messages = parse(r#"{"messages": [{}]}"#);
        assert_eq!(messages, vec![RawMessage::new("", "Unknown", "Unknown", "")]);
    }

    #[test]
    fn test_resolve_empty_creator() {
        let messages = parse(r#"{"messages": [{"text": "x", "creator": {}}]}"#);
        assert_eq!(messages[0].name, "Unknown");
        assert_eq!(messages[0].user_type, "Unknown");
    }

    #[test]
    fn test_null_fields_default() {
        let messages = parse(
            r#"{"messages": [{"text": null, "creator": null, "created_date": null}]}"#,
        );
        assert_eq!(messages, vec![RawMessage::new("", "Unknown", "Unknown", "")]);
    }

    #[test]
    fn test_missing_messages_key() {
        assert!(parse(r#"{"groups": []}"#).is_empty());
        assert!(parse("{}").is_empty());
    }

    #[test]
    fn test_keeps_export_order() {
        let messages = parse(
            r#"{"messages": [{"text": "a"}, {"text": "b"}, {"text": "c"}]}"#,
        );
        let texts: Vec<_> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_rejects_non_object_documents() {
        for json in [
            r#"[[{"text": "hi", "creator": {"name": "Vrunda Mundhra", "user_type": "Human"}}]]"#,
            "[]",
            r#""str""#,
            "42",
            "null",
        ] {
            assert!(GoogleChatExport::from_json(json).is_err(), "accepted {json}");
        }
    }

    #[test]
    fn test_repeated_messages_key_last_wins() {
        let messages = parse(r#"{"messages": [{"text": "old"}], "messages": [{"text": "new"}]}"#);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "new");
    }
}
