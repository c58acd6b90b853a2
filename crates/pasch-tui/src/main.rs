//! Standalone TUI binary for Pasch.

use std::process;

use clap::Parser;

use pasch_game::{Distribution, GameConfig, GameSession};

#[derive(Parser)]
#[command(name = "pasch-tui", about = "Terminal UI for the Pasch dice game", version)]
struct Args {
    /// Comma-separated player names; when given, the game starts immediately
    #[arg(long)]
    players: Option<String>,

    /// Roll distribution: real (2d6) or uniform
    #[arg(long, default_value = "real")]
    distribution: String,

    /// RNG seed for reproducible rolls
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    let Some(distribution) = Distribution::from_name(&args.distribution) else {
        eprintln!(
            "error: unknown distribution '{}', use: real, uniform",
            args.distribution
        );
        process::exit(1);
    };

    let config = GameConfig::default()
        .with_seed(args.seed)
        .with_distribution(distribution);
    let mut session = GameSession::new(config);

    if let Some(spec) = &args.players
        && let Err(e) = session.start(parse_players(spec), distribution)
    {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let app = pasch_tui::app::TuiApp::new(session);

    if let Err(e) = pasch_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Split a comma-separated player list, dropping empty entries.
fn parse_players(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
