//! textjust command-line entry point

use anyhow::Result;
use clap::Parser;
use textjust_cli::commands::{Commands, ListCommands};
use textjust_cli::output::OutputFormat;

/// Fixed-width text justification
#[derive(Debug, Parser)]
#[command(name = "textjust", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Justify(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Formats => {
                    for format in OutputFormat::ALL {
                        println!("{:<10} {}", format.name(), format.description());
                    }
                }
            }
            Ok(())
        }
    }
}
