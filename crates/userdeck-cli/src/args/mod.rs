mod commands;
mod enums;
pub mod hints;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "userdeck")]
#[command(about = "Browse a directory of random user profiles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $USERDECK_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Read users from a saved API response instead of the network
    #[arg(long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Override the API base URL from config.toml
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
