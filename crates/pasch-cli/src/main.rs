//! CLI frontend for the Pasch dice game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pasch",
    about = "Pasch — a turn-based two-dice game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    Play {
        /// Comma-separated player names; when given, skips the setup screen
        #[arg(short, long)]
        players: Option<String>,

        /// Roll distribution: real (2d6) or uniform
        #[arg(short, long, default_value = "real")]
        distribution: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Play a number of rounds headless and print the result tables
    Simulate {
        /// Number of full rounds (every player rolls once per round)
        #[arg(short, long, default_value = "10")]
        rounds: u64,

        /// Comma-separated player names
        #[arg(short, long, default_value = "Player 1,Player 2")]
        players: String,

        /// Roll distribution: real (2d6) or uniform
        #[arg(short, long, default_value = "real")]
        distribution: String,

        /// RNG seed for deterministic rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Write the final game state to a JSON snapshot
        #[arg(long)]
        save: Option<PathBuf>,

        /// Print every individual roll
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the result tables from a saved JSON snapshot
    Show {
        /// Snapshot file written by `simulate --save`
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            players,
            distribution,
            seed,
        } => commands::play::run(players.as_deref(), &distribution, seed),
        Commands::Simulate {
            rounds,
            players,
            distribution,
            seed,
            save,
            verbose,
        } => commands::simulate::run(
            &players,
            &distribution,
            rounds,
            seed,
            save.as_deref(),
            verbose,
        ),
        Commands::Show { file } => commands::show::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
