use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Snapshot, Vector};
use crate::metrics::GameMetrics;

/// What occupies a single grid cell, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Head,
    Body,
    Food,
    Empty,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_grid(snapshot), game_area);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn cell_at(snapshot: &Snapshot, pos: Vector) -> Cell {
        if snapshot.snake.first() == Some(&pos) {
            Cell::Head
        } else if snapshot.snake.contains(&pos) {
            Cell::Body
        } else if snapshot.food.contains(&pos) {
            Cell::Food
        } else {
            Cell::Empty
        }
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(snapshot.grid.height as usize);

        for y in 0..snapshot.grid.height {
            let spans: Vec<Span> = (0..snapshot.grid.width)
                .map(|x| match Self::cell_at(snapshot, Vector::new(x, y)) {
                    Cell::Head => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::Body => Span::styled("■ ", Style::default().fg(Color::Red)),
                    Cell::Food => Span::styled("● ", Style::default().fg(Color::Green)),
                    Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                })
                .collect();

            lines.push(Line::from(spans));
        }

        let (title, border_color) = if snapshot.running {
            (" Snake ", Color::White)
        } else {
            (" PAUSED ", Color::Yellow)
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Eaten: ", label),
            Span::styled(metrics.food_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
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
