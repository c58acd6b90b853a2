//! The running game screen: rolling, histogram, and history.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table};

use pasch_game::{GameSession, GameState, RollOutcome, frequency_table, roll_table};

use super::{InputMode, Screen, ScreenEvent, ScreenId};

/// Game screen state.
pub struct GameScreen {
    /// The most recent roll, for the announcement line.
    last_outcome: Option<RollOutcome>,
}

impl GameScreen {
    /// Create a game screen with no roll yet.
    pub fn new() -> Self {
        Self { last_outcome: None }
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    fn input_mode(&self) -> InputMode {
        InputMode::Nav
    }

    fn handle_key(&mut self, session: &mut GameSession, key: KeyEvent) -> ScreenEvent {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => match session.roll() {
                Ok(outcome) => self.last_outcome = Some(outcome),
                // No active game: route back to configuration.
                Err(_) => return ScreenEvent::SwitchTo(ScreenId::Setup),
            },
            KeyCode::Char('r') => {
                session.reset();
                self.last_outcome = None;
                return ScreenEvent::SwitchTo(ScreenId::Setup);
            }
            _ => {}
        }
        ScreenEvent::None
    }

    fn draw(&self, session: &GameSession, frame: &mut Frame, area: Rect) {
        let Some(state) = session.state() else {
            let msg = Paragraph::new("No active game. Press r to return to setup.")
                .style(Style::default().fg(Color::Red));
            frame.render_widget(msg, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // turn banner
                Constraint::Length(12), // histogram
                Constraint::Min(5),     // history + stats
            ])
            .split(area);

        draw_turn_banner(frame, state, self.last_outcome.as_ref(), chunks[0]);
        draw_histogram(frame, state, chunks[1]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[2]);
        draw_history(frame, state, bottom[0]);
        draw_stats(frame, state, bottom[1]);
    }

    fn status_hint(&self) -> &str {
        "Enter/Space:roll  r:reset  ?:help  q:quit"
    }
}

/// Draw the current-turn banner and latest roll announcement.
fn draw_turn_banner(
    frame: &mut Frame,
    state: &GameState,
    last_outcome: Option<&RollOutcome>,
    area: Rect,
) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Current turn: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.current_player().to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::styled(
            "   (Enter or Space to roll)",
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    match last_outcome {
        Some(outcome) => lines.push(Line::from(vec![
            Span::styled("Last roll:    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                outcome.to_string(),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ])),
        None => lines.push(Line::from(Span::styled(
            "No rolls yet. Roll to begin!",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the sum-frequency histogram.
fn draw_histogram(frame: &mut Frame, state: &GameState, area: Rect) {
    let block = Block::default()
        .title(" Distribution of Rolls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.total_rolls() == 0 {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let msg = Paragraph::new("Roll some dice to see the distribution!")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    let freq = frequency_table(state);
    let labels: Vec<String> = freq.iter().map(|&(sum, _)| sum.to_string()).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(freq.iter())
        .map(|(label, &(_, count))| (label.as_str(), count))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(&data)
        .bar_width(3)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .label_style(Style::default().fg(Color::White));
    frame.render_widget(chart, area);
}

/// Draw the roll-history table, most recent rounds last.
fn draw_history(frame: &mut Frame, state: &GameState, area: Rect) {
    let block = Block::default()
        .title(" Roll History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let table = roll_table(state);
    if table.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let msg = Paragraph::new("No rolls yet.").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    // Keep the latest rounds visible when the table outgrows the area.
    // Two border rows and the header row do not hold data.
    let visible = area.height.saturating_sub(3) as usize;
    let skip = table.round_count().saturating_sub(visible.max(1));

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(table.players.iter().map(|p| {
                Cell::from(p.clone()).style(Style::default().fg(Color::Yellow).bold())
            }))
            .collect::<Vec<Cell>>(),
    );

    let rows: Vec<Row> = table
        .rows
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, cells)| {
            Row::new(
                std::iter::once(Cell::from(format!("Roll {}", i + 1)).style(
                    Style::default().fg(Color::DarkGray),
                ))
                .chain(cells.iter().map(|cell| {
                    Cell::from(cell.map(|v| v.to_string()).unwrap_or_else(|| "–".into()))
                }))
                .collect::<Vec<Cell>>(),
            )
        })
        .collect();

    let mut widths = vec![Constraint::Length(8)];
    widths.extend(table.players.iter().map(|_| Constraint::Min(6)));

    let widget = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(widget, area);
}

/// Draw the per-player totals panel.
fn draw_stats(frame: &mut Frame, state: &GameState, area: Rect) {
    let block = Block::default()
        .title(" Totals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total rolls: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.total_rolls().to_string(),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(""),
    ];
    for player in &state.players {
        let count = state
            .rolls_by_player
            .get(player)
            .map(Vec::len)
            .unwrap_or(0);
        lines.push(Line::from(vec![
            Span::styled(format!("{player}: "), Style::default().fg(Color::White)),
            Span::styled(format!("{count}"), Style::default().fg(Color::DarkGray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
