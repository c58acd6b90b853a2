use std::fs;
use std::path::Path;

use colored::Colorize;

use pasch_game::GameState;

use super::{print_frequency, print_roll_history};

pub fn run(file: &Path) -> Result<(), String> {
    let json =
        fs::read_to_string(file).map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let state = GameState::from_json(&json).map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        "Snapshot".bold(),
        format!(
            "({} players, {} distribution)",
            state.players.len(),
            state.distribution
        )
        .dimmed()
    );
    println!("  {} rolls recorded", state.total_rolls());
    println!("  Next to roll: {}", state.current_player().bold());
    println!();

    print_frequency(&state);
    print_roll_history(&state);

    Ok(())
}
