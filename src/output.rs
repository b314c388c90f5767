//! JSON output writer.
//!
//! Output is an indented JSON array (two spaces), UTF-8, with non-ASCII
//! characters written as-is. An empty list is written as `[]`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::FilteredMessage;
use crate::error::Result;

/// Writes messages to `output_path` as a JSON array, replacing any existing file.
///
/// # Format
/// ```json
/// [
///   {
///     "text": "hi",
///     "sender": "Vrunda Mundhra",
///     "timestamp": "t1",
///     "is_vrunda": true
///   }
/// ]
/// ```
pub fn write_json(messages: &[FilteredMessage], output_path: &Path) -> Result<()> {
    let json = to_json(messages)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    debug!(path = %output_path.display(), bytes = json.len(), "output written");
    Ok(())
}

/// Converts messages to the same JSON text [`write_json`] puts on disk.
pub fn to_json(messages: &[FilteredMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_to_json_layout() {
        let messages = vec![FilteredMessage::new("hi", "Vrunda Mundhra", "t1", true)];
        let json = to_json(&messages).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"text\": \"hi\",\n    \"sender\": \"Vrunda Mundhra\",\n    \"timestamp\": \"t1\",\n    \"is_vrunda\": true\n  }\n]"
        );
    }

    #[test]
    fn test_to_json_keeps_non_ascii() {
        let messages = vec![FilteredMessage::new("नमस्ते 🎉 ça va", "Harshiv Gajjar", "", false)];
        let json = to_json(&messages).unwrap();
        assert!(json.contains("नमस्ते 🎉 ça va"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_json_overwrites() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "previous contents that are longer than the output").unwrap();

        write_json(&[], temp_file.path()).unwrap();

        assert_eq!(fs::read_to_string(temp_file.path()).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_json(&[], &dir.path().join("missing").join("out.json")).unwrap_err();
        assert!(err.is_io());
    }
}
