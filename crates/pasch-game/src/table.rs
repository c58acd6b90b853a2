//! Derived, read-only views over a game state.
//!
//! Frontends render these directly: the roll table feeds tabular history
//! display, the frequency table feeds the histogram.

use crate::dice::{MAX_SUM, MIN_SUM};
use crate::state::GameState;

/// Roll history as a rectangle: one column per player, one row per round.
///
/// Shorter histories are padded with `None` up to the longest history, so
/// every row has exactly one cell per player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollTable {
    /// Column headers in turn order.
    pub players: Vec<String>,
    /// `rows[r][c]` is player `c`'s roll in round `r + 1`, if taken.
    pub rows: Vec<Vec<Option<u32>>>,
}

impl RollTable {
    /// True when no player has rolled yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rounds in the table (the longest history).
    pub fn round_count(&self) -> usize {
        self.rows.len()
    }
}

/// Build the rectangular roll history for the given state.
pub fn roll_table(state: &GameState) -> RollTable {
    let rounds = state
        .players
        .iter()
        .filter_map(|p| state.rolls_by_player.get(p))
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let rows = (0..rounds)
        .map(|round| {
            state
                .players
                .iter()
                .map(|p| {
                    state
                        .rolls_by_player
                        .get(p)
                        .and_then(|history| history.get(round))
                        .copied()
                })
                .collect()
        })
        .collect();

    RollTable {
        players: state.players.clone(),
        rows,
    }
}

/// The eleven (sum, count) pairs in ascending sum order.
pub fn frequency_table(state: &GameState) -> Vec<(u32, u64)> {
    (MIN_SUM..=MAX_SUM)
        .map(|sum| (sum, state.sum_counts.get(&sum).copied().unwrap_or(0)))
        .collect()
}
