//! # Chatsift
//!
//! Filters a Google Chat (Takeout) direct-message export down to the messages
//! exchanged by two named participants, dropping bot messages, and writes the
//! result as indented JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let report = Pipeline::new(PipelineConfig::default()).run()?;
//!     println!("Kept {} messages", report.stats.kept);
//!     Ok(())
//! }
//! ```
//!
//! ## Working on strings
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let raw = parse_messages_str(r#"{"messages": [
//!     {"text": "hi", "creator": {"name": "Vrunda Mundhra", "user_type": "Human"}, "created_date": "t1"},
//!     {"text": "beep", "creator": {"name": "Bot1", "user_type": "Bot"}, "created_date": "t2"}
//! ]}"#)?;
//!
//! let filtered = apply_filter(raw, &Participants::default());
//! assert_eq!(filtered.len(), 1);
//! assert!(to_json(&filtered)?.contains("\"is_vrunda\": true"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`config`] - [`Participants`](config::Participants), [`PipelineConfig`](config::PipelineConfig), defaults
//! - [`parsing`] - Google Chat wire records and [`RawMessage`](parsing::RawMessage)
//! - [`loader`] - [`load_messages`](loader::load_messages), [`parse_messages_str`](loader::parse_messages_str)
//! - [`filter`] - [`apply_filter`](filter::apply_filter), [`FilterStats`](filter::FilterStats)
//! - [`output`] - [`write_json`](output::write_json), [`to_json`](output::to_json)
//! - [`pipeline`] - [`Pipeline`](pipeline::Pipeline) tying the stages together
//! - [`error`] - [`ChatsiftError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod message;
pub mod output;
pub mod parsing;
pub mod pipeline;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::FilteredMessage;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::FilteredMessage;

    pub use crate::error::{ChatsiftError, Result};

    pub use crate::config::{Participants, PipelineConfig};

    pub use crate::parsing::RawMessage;

    pub use crate::loader::{load_messages, parse_messages_str};

    pub use crate::filter::{FilterStats, Verdict, apply_filter, apply_filter_with_stats, classify};

    pub use crate::output::{to_json, write_json};

    pub use crate::pipeline::{Pipeline, RunReport};
}
