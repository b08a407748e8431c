use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradz")]
#[command(about = "Auto-assign difficulty tags to flashcard notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the collection file (default: GRADZ_COLLECTION or the user data dir)
    #[arg(short, long, global = true)]
    pub collection: Option<PathBuf>,

    /// Directory holding the threshold settings (default: GRADZ_CONFIG_DIR or the user config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign difficulty tags to the notes of matching cards
    #[command(alias = "t")]
    Tag {
        /// Selection query: tag:NAME, deck:NAME, or free text over note
        /// fields. All cards when omitted.
        #[arg(required = false)]
        query: Option<String>,
    },

    /// List notes with their current difficulty tag
    #[command(alias = "ls")]
    List,

    /// Get or set classification thresholds
    Config {
        /// Threshold key (e.g. hard_lapses_min)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,

        /// Restore every threshold to its default
        #[arg(long)]
        reset: bool,
    },
}
