pub mod play;
pub mod show;
pub mod simulate;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pasch_game::{Distribution, GameState, frequency_table, roll_table};

/// Parse a distribution flag value.
pub(crate) fn parse_distribution(name: &str) -> Result<Distribution, String> {
    Distribution::from_name(name)
        .ok_or_else(|| format!("unknown distribution '{name}', use: real, uniform"))
}

/// Split a comma-separated player list, dropping empty entries.
pub(crate) fn parse_players(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Width of the longest frequency bar.
const BAR_WIDTH: u64 = 40;

/// Print the sum-frequency histogram.
pub(crate) fn print_frequency(state: &GameState) {
    println!("  {}", "Distribution of Rolls".bold().underline());
    println!();

    let freq = frequency_table(state);
    let max = freq.iter().map(|&(_, count)| count).max().unwrap_or(0);

    println!("  {:>3}  {:>5}", "Sum".dimmed(), "Count".dimmed());
    for (sum, count) in freq {
        let width = if max == 0 {
            0
        } else {
            (count * BAR_WIDTH / max) as usize
        };
        let bar = "#".repeat(width);
        println!("  {sum:>3}  {count:>5}  {}", bar.cyan());
    }
    println!();
}

/// Print the roll history as a table, one column per player.
pub(crate) fn print_roll_history(state: &GameState) {
    println!("  {}", "Roll History".bold().underline());
    println!();

    let history = roll_table(state);
    if history.is_empty() {
        println!("  {}", "(no rolls)".dimmed());
        println!();
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![String::new()];
    header.extend(history.players.iter().cloned());
    table.set_header(header);

    for (i, row) in history.rows.iter().enumerate() {
        let mut cells = vec![format!("Roll {}", i + 1)];
        cells.extend(
            row.iter()
                .map(|cell| cell.map(|v| v.to_string()).unwrap_or_else(|| "-".into())),
        );
        table.add_row(cells);
    }

    println!("{table}");
    println!();
}
