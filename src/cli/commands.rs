//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "anotis")]
#[command(about = "Terminal note-keeping application", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all notes, most recent first
    List,

    /// Print a note's content
    Show {
        /// Title of the note (exact match)
        title: String,
    },

    /// Create or update a note
    Save {
        /// Title of the note
        title: String,

        /// Note content (read from stdin when omitted)
        #[arg(short = 'm', long)]
        content: Option<String>,

        /// Previous title when editing; a differing title renames the note
        #[arg(long)]
        previous: Option<String>,
    },

    /// Open a note in the configured editor, creating it if missing
    Open {
        /// Title of the note
        title: String,
    },

    /// Delete a note
    Delete {
        /// Title of the note (exact match)
        title: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
