//! Command-line interface definition using clap.
//!
//! Every flag is optional: running `chatsift` with no arguments reads the
//! export from [`DEFAULT_INPUT_DIR`] and writes [`DEFAULT_OUTPUT`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT, PipelineConfig};

/// Keep only the two participants' messages from a Google Chat DM export,
/// dropping bot messages.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift
    chatsift -i \"Takeout/Google Chat/Groups/DM abc\" -o chats.json
    RUST_LOG=chatsift=debug chatsift")]
pub struct Args {
    /// Directory containing messages.json
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Path to output file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Log every skipped message
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the pipeline configuration these arguments describe.
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig::new()
            .with_input_dir(&self.input_dir)
            .with_output(&self.output)
    }
}
