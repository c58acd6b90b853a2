use pasch_game::{GameConfig, GameSession};
use pasch_tui::app::TuiApp;

use super::{parse_distribution, parse_players};

pub fn run(players: Option<&str>, distribution: &str, seed: u64) -> Result<(), String> {
    let distribution = parse_distribution(distribution)?;

    let config = GameConfig::default()
        .with_seed(seed)
        .with_distribution(distribution);
    let mut session = GameSession::new(config);

    if let Some(spec) = players {
        session
            .start(parse_players(spec), distribution)
            .map_err(|e| e.to_string())?;
    }

    pasch_tui::terminal::run(TuiApp::new(session))
}
