//! Skirmish CLI - play or script a two-player energy duel.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Skirmish - a two-player terminal energy duel
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Name for player one
        #[arg(long, default_value = "Yad")]
        p1: String,

        /// Name for player two
        #[arg(long, default_value = "Diks")]
        p2: String,
    },

    /// Run a scripted match without a UI
    Run {
        /// Action script (.json)
        #[arg(required = true)]
        script: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress the per-action transcript
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { p1, p2 } => cli::play::execute(p1, p2),

        Commands::Run {
            script,
            format,
            quiet,
        } => cli::run::execute(&script, format, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
