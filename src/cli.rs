//! CLI definitions for Concierge.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Concierge CLI.
#[derive(Parser)]
#[command(name = "concierge")]
#[command(about = "Scheduling and restaurant recommendation tools for a conversational agent")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the registered tools
    Tools {
        /// Output format
        #[arg(long, value_enum, default_value_t = ToolsFormat::Table)]
        format: ToolsFormat,
    },

    /// Run a single tool through the registry
    Exec {
        /// Tool ID
        tool: String,

        /// Tool parameters as a JSON object
        #[arg(long, default_value = "{}")]
        params: String,

        /// Approve a tool that requires human confirmation
        #[arg(long)]
        approve: bool,
    },

    /// Show the loaded configuration
    Config {
        /// Also report validation errors and warnings
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ToolsFormat {
    Table,
    Json,
    Openai,
    Anthropic,
}
