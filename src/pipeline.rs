//! Load, filter, write.
//!
//! [`Pipeline`] exposes each stage so a caller can report progress between
//! them, and [`Pipeline::run`] chains all three.
//!
//! ```rust,no_run
//! use chatsift::pipeline::Pipeline;
//! use chatsift::config::PipelineConfig;
//!
//! # fn main() -> chatsift::Result<()> {
//! let report = Pipeline::new(PipelineConfig::default()).run()?;
//! println!("{} of {} messages kept", report.stats.kept, report.stats.total);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tracing::info;

use crate::FilteredMessage;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::filter::{FilterStats, apply_filter_with_stats};
use crate::loader::load_messages;
use crate::output::write_json;
use crate::parsing::RawMessage;

/// Result of loading the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// `false` when the export file was missing; `messages` is then empty.
    pub found: bool,
    pub messages: Vec<RawMessage>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub input_path: PathBuf,
    pub input_found: bool,
    pub stats: FilterStats,
    pub output_path: PathBuf,
}

/// The filter-and-export pipeline for one configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reads the export. A missing file yields an empty, not-found result.
    pub fn load(&self) -> Result<Loaded> {
        let loaded = match load_messages(&self.config.input_path())? {
            Some(messages) => Loaded {
                found: true,
                messages,
            },
            None => Loaded {
                found: false,
                messages: Vec::new(),
            },
        };
        info!(found = loaded.found, records = loaded.messages.len(), "load stage done");
        Ok(loaded)
    }

    /// Applies bot exclusion and the participant whitelist.
    pub fn filter(&self, messages: Vec<RawMessage>) -> (Vec<FilteredMessage>, FilterStats) {
        let (filtered, stats) = apply_filter_with_stats(messages, &self.config.participants);
        info!(
            kept = stats.kept,
            bots = stats.bots,
            outsiders = stats.outsiders,
            "filter stage done"
        );
        (filtered, stats)
    }

    /// Writes the filtered messages to the configured output path.
    pub fn write(&self, messages: &[FilteredMessage]) -> Result<()> {
        write_json(messages, &self.config.output)?;
        info!(path = %self.config.output.display(), count = messages.len(), "write stage done");
        Ok(())
    }

    /// Runs all three stages.
    pub fn run(&self) -> Result<RunReport> {
        let loaded = self.load()?;
        let (filtered, stats) = self.filter(loaded.messages);
        self.write(&filtered)?;

        Ok(RunReport {
            input_path: self.config.input_path(),
            input_found: loaded.found,
            stats,
            output_path: self.config.output.clone(),
        })
    }
}
