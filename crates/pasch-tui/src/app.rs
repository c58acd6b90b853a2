//! Top-level application state: the session and the active screen.

use crossterm::event::KeyEvent;
use ratatui::prelude::*;

use pasch_game::GameSession;

use crate::screens::game::GameScreen;
use crate::screens::setup::SetupScreen;
use crate::screens::{InputMode, Screen, ScreenEvent, ScreenId};

/// Main application state for the TUI.
pub struct TuiApp {
    /// The game session shared by all screens.
    pub session: GameSession,
    /// Currently active screen.
    pub screen: ScreenId,
    /// Setup screen state.
    pub setup: SetupScreen,
    /// Game screen state.
    pub game: GameScreen,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Create the app around a session.
    ///
    /// Opens on the game screen when the session already has an active game
    /// (players supplied on the command line), otherwise on setup.
    pub fn new(session: GameSession) -> Self {
        let screen = if session.is_active() {
            ScreenId::Game
        } else {
            ScreenId::Setup
        };
        let setup = SetupScreen::new(session.config());

        Self {
            session,
            screen,
            setup,
            game: GameScreen::new(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Input mode of the active screen.
    pub fn active_input_mode(&self) -> InputMode {
        self.active_screen_ref().input_mode()
    }

    /// Status bar text of the active screen.
    pub fn status_hint(&self) -> &str {
        self.active_screen_ref().status_hint()
    }

    fn active_screen_ref(&self) -> &dyn Screen {
        match self.screen {
            ScreenId::Setup => &self.setup,
            ScreenId::Game => &self.game,
        }
    }

    /// Forward a key event to the active screen and apply its outcome.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let event = match self.screen {
            ScreenId::Setup => self.setup.handle_key(&mut self.session, key),
            ScreenId::Game => self.game.handle_key(&mut self.session, key),
        };
        match event {
            ScreenEvent::None => {}
            ScreenEvent::SwitchTo(screen) => self.screen = screen,
            ScreenEvent::Quit => self.should_quit = true,
        }
    }

    /// Draw the active screen into the given area.
    pub fn draw_screen(&self, frame: &mut Frame, area: Rect) {
        self.active_screen_ref().draw(&self.session, frame, area);
    }
}
