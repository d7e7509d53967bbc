//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod justify;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Justify text into fixed-width lines
    Justify(justify::JustifyArgs),

    /// Write a configuration file with default settings
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}
