//! Error types for the game core.

use thiserror::Error;

/// Convenience result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while configuring or playing a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The player list is empty or contains duplicate names.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A roll was requested but no game has been started.
    #[error("no active game")]
    NoActiveGame,

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
