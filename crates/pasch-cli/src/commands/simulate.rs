use std::fs;
use std::path::Path;

use colored::Colorize;

use pasch_game::{GameConfig, GameSession};

use super::{parse_distribution, parse_players, print_frequency, print_roll_history};

pub fn run(
    players: &str,
    distribution: &str,
    rounds: u64,
    seed: u64,
    save: Option<&Path>,
    verbose: bool,
) -> Result<(), String> {
    let distribution = parse_distribution(distribution)?;
    let names = parse_players(players);
    let player_count = names.len();

    let config = GameConfig::default()
        .with_seed(seed)
        .with_distribution(distribution);
    let mut session = GameSession::new(config);
    session
        .start(names, distribution)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({player_count} players, {rounds} rounds, seed={seed}, {distribution} distribution)")
            .dimmed()
    );

    for _ in 0..rounds {
        for _ in 0..player_count {
            let outcome = session.roll().map_err(|e| e.to_string())?;
            if verbose {
                println!(
                    "  {} rolled a {}",
                    outcome.player,
                    outcome.value.to_string().yellow().bold()
                );
            }
        }
    }

    let state = session.state().ok_or("no active game")?;
    println!("  {} rolls recorded", state.total_rolls());
    println!();

    print_frequency(state);
    print_roll_history(state);

    if let Some(path) = save {
        let json = state.to_json().map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        println!("  Snapshot written to {}", path.display());
    }

    Ok(())
}
