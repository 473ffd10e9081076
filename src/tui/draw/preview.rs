//! Command preview and status line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::{App, Status};
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

pub(crate) fn draw_preview(f: &mut Frame, app: &App, area: Rect) {
    let (text, style, border) = match &app.preview {
        Ok(cmd) => (cmd.clone(), Style::default(), ACCENT_SECONDARY),
        Err(e) => (e.clone(), Style::default().fg(Color::Red), Color::Red),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Sage command ");
    let para = Paragraph::new(Line::from(Span::styled(text, style)))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

pub(crate) fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(Status::Info(msg)) => Line::from(Span::styled(msg.as_str(), Style::default().fg(ACCENT))),
        Some(Status::Error(msg)) => Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(msg.as_str(), Style::default().fg(Color::Red)),
        ]),
        None => Line::from(Span::styled(
            "Enter plots the current rows; the last command is printed on exit.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
