//! Game session management.
//!
//! A `GameSession` is the explicit unit of state a frontend owns: the
//! current game (if one has been started) plus the session RNG. Frontends
//! pass it into their handlers instead of keeping ambient globals, so the
//! core stays independently testable.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::dice::Distribution;
use crate::error::{GameError, GameResult};
use crate::state::{GameState, RollOutcome};

/// An interactive dice game session.
pub struct GameSession {
    state: Option<GameState>,
    rng: StdRng,
    config: GameConfig,
}

impl GameSession {
    /// Create a session with no active game.
    pub fn new(config: GameConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            state: None,
            rng,
            config,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The active game state, if a game has been started.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// True when a game is in progress.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Start a new game, replacing any active one.
    ///
    /// On [`GameError::InvalidConfiguration`] the previous game (if any)
    /// is left untouched, so the caller can re-prompt for names.
    pub fn start(&mut self, players: Vec<String>, distribution: Distribution) -> GameResult<()> {
        let state = GameState::new(players, distribution)?;
        self.state = Some(state);
        Ok(())
    }

    /// Install a previously serialized game state.
    pub fn resume(&mut self, state: GameState) {
        self.state = Some(state);
    }

    /// Roll for the current player and advance the turn.
    pub fn roll(&mut self) -> GameResult<RollOutcome> {
        let state = self.state.as_mut().ok_or(GameError::NoActiveGame)?;
        Ok(state.advance_turn(&mut self.rng))
    }

    /// The player whose turn is next.
    pub fn current_player(&self) -> GameResult<&str> {
        self.state
            .as_ref()
            .map(GameState::current_player)
            .ok_or(GameError::NoActiveGame)
    }

    /// Discard the active game and return to the unconfigured state.
    pub fn reset(&mut self) {
        self.state = None;
    }
}
