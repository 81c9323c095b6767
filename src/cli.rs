//! CLI argument parsing for the demo binary using clap.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::filter::Entry;

/// `promptkit` - terminal prompt widgets
///
/// Runs one prompt per invocation and prints its result to stdout, so the
/// prompts can be scripted from the shell.
#[derive(Parser, Debug)]
#[command(name = "promptkit", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick one entry from a filterable list; prints its payload
    Select {
        /// Inline entries, either "display=payload" or plain text
        items: Vec<String>,
        /// JSON file with [{"display": ..., "payload": ...}] entries
        #[arg(long, conflicts_with = "items")]
        file: Option<PathBuf>,
        /// Title shown before the filter field
        #[arg(long)]
        title: Option<String>,
        /// Show the key help line
        #[arg(long)]
        help_bar: bool,
    },
    /// Ask a yes/no question; prints "yes" or "no"
    Confirm {
        /// The question to display
        #[arg(long, default_value = "Proceed?")]
        title: String,
        /// Label for the affirmative button
        #[arg(long, default_value = "Yes")]
        yes: String,
        /// Label for the negative button
        #[arg(long, default_value = "No")]
        no: String,
        /// Show the key help line
        #[arg(long)]
        help_bar: bool,
    },
    /// Capture one line of text; prints the typed value
    Input {
        /// Title shown above the field
        #[arg(long)]
        title: Option<String>,
        /// Placeholder shown while the field is empty
        #[arg(long)]
        placeholder: Option<String>,
        /// Show the key help line
        #[arg(long)]
        help_bar: bool,
    },
    /// Show the spinner for a fixed duration (demo)
    Spin {
        /// Label shown next to the spinner
        #[arg(long, default_value = "Working...")]
        text: String,
        /// Text left on screen when the spinner stops
        #[arg(long, default_value = "done")]
        done: String,
        /// How long to spin, in milliseconds
        #[arg(long, default_value_t = 1500)]
        millis: u64,
    },
}

/// Loads select entries from a JSON file.
pub fn load_entries(path: &Path) -> anyhow::Result<Vec<Entry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read entry file {}", path.display()))?;
    let entries: Vec<Entry> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid entry file {}", path.display()))?;
    Ok(entries)
}

/// Parses one inline item: `display=payload`, or plain text used as both.
#[must_use]
pub fn parse_item(raw: &str) -> Entry {
    match raw.split_once('=') {
        Some((display, payload)) => Entry::new(display, payload),
        None => Entry::new(raw, raw),
    }
}
