//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Analyze every feature file under a directory and print a report
//! - `init`: Write a default `.gherkinrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Directory to scan (overrides `root` in the config file)
    pub path: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Glob pattern or root-relative path to skip, added to the config
    /// file's ignores. Can be specified multiple times.
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignores: Vec<String>,

    /// Feature file extension (replaces the config file's extensions).
    /// Can be specified multiple times.
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract features, scenarios and steps from Gherkin feature files
    Scan(ScanCommand),
    /// Initialize a new .gherkinrc.json configuration file
    Init,
}
