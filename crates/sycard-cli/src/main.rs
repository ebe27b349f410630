//! Sycard CLI - Command-line interface for sampler wave cards
//!
//! This binary unpacks wave card images into a metadata document plus one
//! WAV file per sample, and prints card summaries.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use sycard_cli::commands;

/// Sycard - Sampler Wave Card Tool
#[derive(Parser)]
#[command(name = "sycard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unpack the CARD-FILE data into the TARGET directory
    Unpack {
        /// Path to the card image
        #[arg(value_name = "CARD-FILE")]
        card_file: String,

        /// Target directory (a <name>.wavecard directory is created inside it if it exists)
        #[arg(value_name = "TARGET", default_value = ".")]
        target: String,

        /// Suppress status output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the waves and samples stored on a card
    Info {
        /// Path to the card image
        #[arg(value_name = "CARD-FILE")]
        card_file: String,

        /// Print the metadata document as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Unpack {
            card_file,
            target,
            quiet,
        } => commands::unpack::run(&card_file, &target, quiet),
        Commands::Info { card_file, json } => commands::info::run(&card_file, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
