use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::Renderer;
use crate::game::{Board, CellState, GameEnd, GameState};
use crate::metrics::GameMetrics;

/// Draws the game into a ratatui terminal
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B) -> Result<Self> {
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        self.terminal
            .draw(|frame| {
                draw_game(frame, state, metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn render_game_over(&mut self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        self.terminal
            .draw(|frame| {
                let game_area = draw_game(frame, state, metrics);
                draw_game_over(frame, game_area, state);
            })
            .context("Failed to draw game over screen")?;
        Ok(())
    }
}

/// Draw header, board and footer; returns the board area
fn draw_game(frame: &mut Frame, state: &GameState, metrics: &GameMetrics) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    frame.render_widget(stats(state, metrics), chunks[0]);
    frame.render_widget(grid(&state.board), chunks[1]);
    frame.render_widget(controls(), chunks[2]);

    chunks[1]
}

fn grid(board: &Board) -> Paragraph<'static> {
    let lines: Vec<Line> = board
        .rows()
        .map(|row| Line::from(row.iter().map(|cell| cell_span(*cell)).collect::<Vec<_>>()))
        .collect();

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
        .alignment(Alignment::Center)
}

fn cell_span(cell: CellState) -> Span<'static> {
    match cell {
        CellState::Head => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        CellState::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
        CellState::Food => Span::styled(
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        CellState::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

fn stats(state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
    let label = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White);

    Paragraph::new(Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
        Span::raw("    "),
        Span::styled("Best: ", label),
        Span::styled(metrics.high_score.max(state.score).to_string(), value),
        Span::raw("    "),
        Span::styled("Length: ", label),
        Span::styled(state.snake.len().to_string(), value),
        Span::raw("    "),
        Span::styled("Time: ", label),
        Span::styled(metrics.format_time(), value),
    ]))
    .alignment(Alignment::Center)
}

fn controls() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
        Span::raw(" or "),
        Span::styled("WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" to move | "),
        Span::styled("Q", Style::default().fg(Color::Red)),
        Span::raw(" to quit"),
    ]))
    .alignment(Alignment::Center)
}

fn draw_game_over(frame: &mut Frame, area: Rect, state: &GameState) {
    let headline = match state.end {
        Some(GameEnd::BoardFull) => "BOARD FULL - YOU WIN",
        _ => "GAME OVER",
    };

    let text = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "N",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]),
    ];

    let popup = centered(area, 44, 7);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        ),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
