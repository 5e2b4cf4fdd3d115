use clap::Subcommand;
use std::path::PathBuf;

use super::enums::Step;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the card grid")]
    List {
        /// Only show users whose first or last name contains this text
        #[arg(long, short = 's')]
        search: Option<String>,

        #[arg(long, help = "Compact output (one line per card)")]
        compact: bool,
    },

    #[command(about = "Show the detail view for a card")]
    Show {
        /// Card number as printed by `list`
        card: usize,

        #[arg(long, short = 's')]
        search: Option<String>,

        /// Navigate from the opened card; repeat to take several steps
        #[arg(long = "step", value_enum)]
        steps: Vec<Step>,
    },

    #[command(about = "Write the directory as a static HTML gallery")]
    Export {
        #[arg(long, short = 'o')]
        output: PathBuf,

        #[arg(long, short = 's')]
        search: Option<String>,
    },

    #[command(about = "Manage config.toml")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Browse the directory in an interactive terminal UI")]
    Browse {
        #[arg(long, short = 's')]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default config.toml")]
    Init {
        #[arg(long, help = "Overwrite an existing config.toml")]
        force: bool,
    },
}
