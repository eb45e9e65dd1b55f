use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::PixelCanvas;
use super::surface::Color;
use crate::game::GameConfig;
use crate::metrics::SessionMetrics;

/// Terminal columns used to draw one grid cell
const CELL_COLUMNS: u16 = 2;
const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 3;
const BORDER: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Smallest terminal (columns, rows) that shows the whole canvas
    pub fn required_size(config: &GameConfig) -> (u16, u16) {
        let columns = u16::try_from(config.columns()).unwrap_or(u16::MAX);
        let rows = u16::try_from(config.rows()).unwrap_or(u16::MAX);
        (
            columns.saturating_mul(CELL_COLUMNS).saturating_add(BORDER),
            rows.saturating_add(BORDER + HEADER_ROWS + FOOTER_ROWS),
        )
    }

    pub fn render(&self, frame: &mut Frame, canvas: &PixelCanvas, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS),
                Constraint::Min(0),
                Constraint::Length(FOOTER_ROWS),
            ])
            .split(frame.area());

        let stats = self.render_stats(metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = centered(
            chunks[1],
            canvas.columns() as u16 * CELL_COLUMNS + BORDER,
            canvas.rows() as u16 + BORDER,
        );
        frame.render_widget(self.render_canvas(canvas), board_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_canvas(&self, canvas: &PixelCanvas) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(canvas.rows());

        for row in 0..canvas.rows() {
            let mut spans = Vec::with_capacity(canvas.columns());

            for column in 0..canvas.columns() {
                let background = canvas.fill_at(column, row).map_or(TuiColor::Reset, to_tui);

                let cell = match canvas.line_at(column, row) {
                    Some(line) => Span::styled("· ", Style::default().fg(to_tui(line)).bg(background)),
                    None => Span::styled("  ", Style::default().bg(background)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(TuiColor::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, metrics: &SessionMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(TuiColor::Yellow)),
            Span::styled(
                metrics.length.to_string(),
                Style::default()
                    .fg(TuiColor::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(TuiColor::Yellow)),
            Span::styled(metrics.ticks.to_string(), Style::default().fg(TuiColor::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(TuiColor::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(TuiColor::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(TuiColor::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(TuiColor::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(TuiColor::Red)),
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

fn to_tui(color: Color) -> TuiColor {
    match color {
        Color::Black => TuiColor::Black,
        Color::White => TuiColor::White,
        Color::Magenta => TuiColor::Magenta,
        Color::DarkGray => TuiColor::DarkGray,
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
