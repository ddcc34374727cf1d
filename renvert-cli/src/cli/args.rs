use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Batch file renames with durable backups and revert
#[derive(Parser, Debug)]
#[command(name = "renvert")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List files in a directory, excluding backup records by default
    List {
        /// Directory to scan
        directory: PathBuf,

        /// Recurse into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Include renvert backup records in the listing
        #[arg(long)]
        include_backups: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Apply a batch of renames, writing a backup record first
    Apply {
        /// JSON file with an array of {directory, current_name, proposed_name}
        /// candidates, or '-' to read them from stdin
        candidates: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress summary output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Preview the contents of a backup record
    Show {
        /// Path to a backup record
        backup: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Revert a previous batch from its backup record
    Revert {
        /// Path to a backup record
        backup: PathBuf,

        /// Revert only these item indexes (as shown by `renvert show`)
        #[arg(long, value_delimiter = ',', value_name = "INDEX")]
        items: Vec<usize>,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress summary output
        #[arg(short, long)]
        quiet: bool,
    },
}
