//! Reads a Google Chat export from disk.
//!
//! The whole document is read into memory and parsed in one go.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatsift::loader::load_messages;
//! use std::path::Path;
//!
//! # fn main() -> chatsift::Result<()> {
//! match load_messages(Path::new("export/messages.json"))? {
//!     Some(messages) => println!("{} records", messages.len()),
//!     None => println!("no export found"),
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{ChatsiftError, Result};
use crate::parsing::{GoogleChatExport, RawMessage};

/// Loads and resolves every record in the export at `path`.
///
/// Returns `Ok(None)` when the file does not exist. Any other read failure
/// and any malformed document are errors.
pub fn load_messages(path: &Path) -> Result<Option<Vec<RawMessage>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "export file not found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let export = GoogleChatExport::from_json(&content)
        .map_err(|e| ChatsiftError::parse(e, Some(path.to_path_buf())))?;
    let messages = export.into_messages();
    debug!(path = %path.display(), records = messages.len(), "export loaded");

    Ok(Some(messages))
}

/// Parses an export document held in memory.
pub fn parse_messages_str(content: &str) -> Result<Vec<RawMessage>> {
    let export = GoogleChatExport::from_json(content).map_err(|e| ChatsiftError::parse(e, None))?;
    Ok(export.into_messages())
}
