//! Terminal UI for the Pasch dice game.
//!
//! Provides a ratatui-based interface with two screens: game setup
//! (player names and distribution choice) and the game itself (rolling,
//! frequency histogram, roll history).

pub mod app;
pub mod screens;
pub mod shared;
pub mod terminal;
