//! TUI rendering: layout and widgets for the inequality form.

mod preview;
mod rows;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::Instant;

use crate::core::app;

use super::app::App;
use super::constants::{ACCENT, PREVIEW_LINES};
use super::shortcuts::labels;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(PREVIEW_LINES),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    rows::draw_rows(f, app, chunks[1]);
    preview::draw_preview(f, app, chunks[2]);
    preview::draw_status(f, app, chunks[3]);
    f.render_widget(
        Paragraph::new(labels::bottom_bar()).alignment(Alignment::Right),
        chunks[4],
    );

    // Toast: top right, below header. Opaque background so it's visible over the rows.
    if let Some(deadline) = app.copy_toast_until {
        if deadline > Instant::now() {
            const HEADER_HEIGHT: u16 = 2;
            let toast_text = " Copied ";
            let toast_width = toast_text.len() as u16 + 2;
            let toast_area = Rect {
                x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
                y: area.y + HEADER_HEIGHT,
                width: toast_width,
                height: 3,
            };
            f.render_widget(Clear, toast_area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .style(Style::default().bg(Color::Black));
            let para = Paragraph::new(Line::from(toast_text))
                .block(block)
                .style(Style::default().fg(ACCENT).bg(Color::Black));
            f.render_widget(para, toast_area);
        } else {
            app.copy_toast_until = None;
        }
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let count = format!("{} row(s)", app.rows.len());
    let line = Line::from(vec![
        Span::styled("◆ ", Style::default().fg(ACCENT)),
        Span::styled(
            app::NAME,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{}  ", app::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(count),
        Span::styled(
            format!("  convention: {}", app.render.convention.as_str()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
