//! Screen definitions, trait, and title bar rendering.

pub mod game;
pub mod setup;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use pasch_game::GameSession;

/// Identifies which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Game configuration: player names and distribution.
    Setup,
    /// The running game: roll, histogram, history.
    Game,
}

/// What a screen asks the app to do after handling a key.
#[derive(Debug, Clone, Copy)]
pub enum ScreenEvent {
    /// Nothing to do.
    None,
    /// Switch to another screen.
    SwitchTo(ScreenId),
    /// Quit the application.
    Quit,
}

/// Whether a screen owns the keyboard or uses plain navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation keys; `q` and `?` are handled globally.
    Nav,
    /// The screen has text fields; most keys go to the screen.
    TextInput,
}

/// Trait that each screen implements.
pub trait Screen {
    /// Return the input mode for event routing.
    fn input_mode(&self) -> InputMode;

    /// Handle a key event against the shared session.
    fn handle_key(&mut self, session: &mut GameSession, key: KeyEvent) -> ScreenEvent;

    /// Draw the screen content into the given area.
    fn draw(&self, session: &GameSession, frame: &mut Frame, area: Rect);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

/// Draw the one-line title bar.
pub fn draw_title_bar(frame: &mut Frame, session: &GameSession, area: Rect) {
    let mut spans = vec![
        Span::styled("Pasch", Style::default().fg(Color::Yellow).bold()),
        Span::styled(" — two dice roll", Style::default().fg(Color::DarkGray)),
    ];
    if let Some(state) = session.state() {
        spans.push(Span::styled(
            format!("   {} distribution", state.distribution),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("   {} rolls", state.total_rolls()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
