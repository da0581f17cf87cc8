use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{GameState, Lifecycle, Position, GRID_SIZE};
use crate::metrics::GameMetrics;

/// Board width in terminal columns: two per cell plus the border
const BOARD_WIDTH: u16 = GRID_SIZE as u16 * 2 + 2;
/// Board height in terminal rows: one per cell plus the border
const BOARD_HEIGHT: u16 = GRID_SIZE as u16 + 2;

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

/// Scores are shown as three digits
pub fn format_score(score: u32) -> String {
    format!("{:03}", score)
}

/// Classify a cell; food is hidden unless a run is in progress
pub fn cell_at(state: &GameState, pos: Position) -> CellKind {
    if pos == state.snake.head() {
        CellKind::Head
    } else if state.snake.collides_with_body(pos) {
        CellKind::Body
    } else if pos == state.food && state.lifecycle == Lifecycle::Running {
        CellKind::Food
    } else {
        CellKind::Empty
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = centered(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        frame.render_widget(self.render_grid(state), board_area);

        if state.lifecycle == Lifecycle::Idle {
            let overlay_area = centered(board_area, BOARD_WIDTH - 8, 9);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(self.render_instructions(metrics), overlay_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(GRID_SIZE as usize);

        for y in 1..=GRID_SIZE {
            let mut spans = Vec::with_capacity(GRID_SIZE as usize);

            for x in 1..=GRID_SIZE {
                let cell = match cell_at(state, Position::new(x, y)) {
                    CellKind::Head => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                    CellKind::Food => Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format_score(state.score()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        // High score appears once the first run of the session has ended
        if metrics.games_played > 0 {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("High: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                format_score(state.high_score),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        spans.extend([
            Span::raw("    "),
            Span::styled("Delay: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}ms", state.speed_delay_ms),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_instructions(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "SPACE",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" or click to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        if let Some(score) = metrics.last_score {
            text.push(Line::from(""));
            text.push(Line::from(vec![
                Span::styled("Last score: ", Style::default().fg(Color::Yellow)),
                Span::styled(format_score(score), Style::default().fg(Color::White)),
            ]));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" / drag to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Snake;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &GameState, metrics: &GameMetrics) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, state, metrics))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn snake_state(lifecycle: Lifecycle) -> GameState {
        let snake = Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)]).unwrap();
        let mut state = GameState::with_snake(snake, Position::new(8, 8));
        state.lifecycle = lifecycle;
        state
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "000");
        assert_eq!(format_score(7), "007");
        assert_eq!(format_score(123), "123");
    }

    #[test]
    fn test_cell_classification() {
        let state = snake_state(Lifecycle::Running);
        assert_eq!(cell_at(&state, Position::new(5, 5)), CellKind::Head);
        assert_eq!(cell_at(&state, Position::new(4, 5)), CellKind::Body);
        assert_eq!(cell_at(&state, Position::new(8, 8)), CellKind::Food);
        assert_eq!(cell_at(&state, Position::new(1, 1)), CellKind::Empty);
    }

    #[test]
    fn test_food_hidden_while_idle() {
        let state = snake_state(Lifecycle::Idle);
        assert_eq!(cell_at(&state, Position::new(8, 8)), CellKind::Empty);
    }

    #[test]
    fn test_instructions_only_when_idle() {
        let metrics = GameMetrics::new();

        assert!(screen(&snake_state(Lifecycle::Idle), &metrics).contains("SPACE"));
        assert!(!screen(&snake_state(Lifecycle::Running), &metrics).contains("SPACE"));
    }

    #[test]
    fn test_high_score_after_first_game() {
        let mut state = snake_state(Lifecycle::Running);
        state.high_score = 4;
        let mut metrics = GameMetrics::new();

        let before = screen(&state, &metrics);
        assert!(before.contains("Score: 001"));
        assert!(!before.contains("High:"));

        metrics.on_game_over(4);
        assert!(screen(&state, &metrics).contains("High: 004"));
    }
}
