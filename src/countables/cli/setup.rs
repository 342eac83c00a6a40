use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "countables", bin_name = "countables", version)]
#[command(about = "Keep count of named things", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data directory instead of the default
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List countables, highest count first
    #[command(alias = "ls")]
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new countable starting at zero
    #[command(alias = "a")]
    Add {
        /// Name of the countable (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Remove a countable (exact name)
    #[command(alias = "rm")]
    Remove { name: String },

    /// Rename a countable
    #[command(alias = "mv")]
    Rename { old: String, new: String },

    /// Increase a count
    #[command(alias = "up")]
    Inc {
        name: String,

        /// Amount to add
        #[arg(short, long, default_value_t = 1)]
        by: u32,
    },

    /// Decrease a count (never below zero)
    #[command(alias = "down")]
    Dec {
        name: String,

        /// Amount to subtract
        #[arg(short, long, default_value_t = 1)]
        by: u32,
    },

    /// Print the path of the data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, pretty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty data file
    Init,
}
