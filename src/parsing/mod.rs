//! Wire formats of supported exports.
//!
//! Each submodule holds the serde structs that mirror an export file and the
//! step that resolves them into the typed records the filter works on.

pub mod google_chat;

pub use google_chat::{GoogleChatCreator, GoogleChatExport, GoogleChatRawMessage, RawMessage};
