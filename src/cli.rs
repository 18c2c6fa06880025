use clap::{Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
pub struct Cli {
    /// Subcommand chosen to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates a shell alias launching Chrome with the given profile
    Add {
        /// Name for the new alias
        alias_name: String,
        /// Chrome profile directory name (e.g. "Profile 1")
        profile: String,
        /// URL to open when the alias runs
        #[arg(long)]
        url: Option<String>,
    },
    /// Lists Chrome profiles and their signed-in emails
    List,
    /// Displays configured paths and raw profile directories
    Debug,
}
