//! Game setup screen: player count, names, and distribution.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use pasch_game::{Distribution, GameConfig, GameSession};

use super::{InputMode, Screen, ScreenEvent, ScreenId};

/// Maximum number of players, as in the original game.
const MAX_PLAYERS: usize = 6;

/// Which setup row has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    /// The player-count row.
    Count,
    /// A player-name field.
    Name(usize),
    /// The distribution selector row.
    Distribution,
}

/// Setup screen state.
pub struct SetupScreen {
    /// Editable player name fields.
    names: Vec<String>,
    /// Currently selected distribution.
    distribution: Distribution,
    /// Focused row.
    focus: Field,
    /// Validation error from the last start attempt.
    error: Option<String>,
}

impl SetupScreen {
    /// Create a setup screen with two default players.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            names: vec![default_name(0), default_name(1)],
            distribution: config.distribution,
            focus: Field::Name(0),
            error: None,
        }
    }

    fn focus_up(&mut self) {
        self.focus = match self.focus {
            Field::Count => Field::Count,
            Field::Name(0) => Field::Count,
            Field::Name(i) => Field::Name(i - 1),
            Field::Distribution => Field::Name(self.names.len() - 1),
        };
    }

    fn focus_down(&mut self) {
        self.focus = match self.focus {
            Field::Count => Field::Name(0),
            Field::Name(i) if i + 1 < self.names.len() => Field::Name(i + 1),
            Field::Name(_) => Field::Distribution,
            Field::Distribution => Field::Distribution,
        };
    }

    fn grow(&mut self) {
        if self.names.len() < MAX_PLAYERS {
            self.names.push(default_name(self.names.len()));
        }
    }

    fn shrink(&mut self) {
        if self.names.len() > 1 {
            self.names.pop();
        }
    }

    /// Final player list: trimmed fields, empty ones replaced by defaults.
    fn player_names(&self) -> Vec<String> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    default_name(i)
                } else {
                    trimmed.to_string()
                }
            })
            .collect()
    }

    fn start(&mut self, session: &mut GameSession) -> ScreenEvent {
        match session.start(self.player_names(), self.distribution) {
            Ok(()) => {
                self.error = None;
                ScreenEvent::SwitchTo(ScreenId::Game)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                ScreenEvent::None
            }
        }
    }
}

/// Default name for the field at `index`.
fn default_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

impl Screen for SetupScreen {
    fn input_mode(&self) -> InputMode {
        InputMode::TextInput
    }

    fn handle_key(&mut self, session: &mut GameSession, key: KeyEvent) -> ScreenEvent {
        match key.code {
            KeyCode::Esc => return ScreenEvent::Quit,
            KeyCode::Enter => return self.start(session),
            KeyCode::Up => self.focus_up(),
            KeyCode::Down | KeyCode::Tab => self.focus_down(),
            KeyCode::Left => match self.focus {
                Field::Count => self.shrink(),
                Field::Distribution => self.distribution = self.distribution.toggled(),
                Field::Name(_) => {}
            },
            KeyCode::Right => match self.focus {
                Field::Count => self.grow(),
                Field::Distribution => self.distribution = self.distribution.toggled(),
                Field::Name(_) => {}
            },
            KeyCode::Backspace => {
                if let Field::Name(i) = self.focus {
                    self.names[i].pop();
                }
            }
            KeyCode::Char(c) => {
                if let Field::Name(i) = self.focus
                    && self.names[i].len() < 24
                {
                    self.names[i].push(c);
                }
            }
            _ => {}
        }
        ScreenEvent::None
    }

    fn draw(&self, _session: &GameSession, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" New Game ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 6 || inner.width < 30 {
            return;
        }

        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(row(
            self.focus == Field::Count,
            "Players:",
            format!("{}  (←/→ to adjust, max {MAX_PLAYERS})", self.names.len()),
        ));
        lines.push(Line::from(""));

        for (i, name) in self.names.iter().enumerate() {
            lines.push(row(
                self.focus == Field::Name(i),
                &format!("Player {} name:", i + 1),
                name.clone(),
            ));
        }
        lines.push(Line::from(""));

        let dist_value = match self.distribution {
            Distribution::Real => "[Real]  Uniform ",
            Distribution::Uniform => " Real  [Uniform]",
        };
        lines.push(row(
            self.focus == Field::Distribution,
            "Distribution:",
            dist_value.to_string(),
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Real = two dice (2d6), Uniform = equal chance for every sum",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to start the game",
            Style::default().fg(Color::Green),
        )));

        if let Some(error) = &self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red).bold(),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn status_hint(&self) -> &str {
        "↑/↓:field  ←/→:adjust  type:edit name  Enter:start  Esc:quit"
    }
}

/// Build one labeled setup row, highlighted when focused.
fn row(focused: bool, label: &str, value: String) -> Line<'static> {
    let marker = if focused { "› " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{label:<16}"), Style::default().fg(Color::DarkGray)),
        Span::styled(value, value_style),
    ])
}
