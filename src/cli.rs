use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "weavekit")]
#[command(about = "Plan method insertions and override synthesis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the insertion described by a manifest and print it
    Plan {
        /// TOML manifest with [[class]] tables and an [insertion] table
        manifest: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file (defaults to the nearest .weavekit.toml)
        #[arg(short, long, env = "WEAVEKIT_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Initialize a .weavekit.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}
