//! Row form: one line per inequality, focused field highlighted.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::inequality::Sign;

use super::super::app::{App, RowField};
use super::super::constants::{ACCENT, ACCENT_SECONDARY, FIELD_WIDTH, VARIABLE_LABELS};

/// First row to show so that the focused row stays visible.
fn scroll_offset(focused: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    focused.saturating_sub(visible - 1)
}

fn cell(value: &str, focused: bool) -> Span<'static> {
    let width = FIELD_WIDTH as usize;
    let text = if value.chars().count() > width {
        let tail: String = value.chars().rev().take(width - 1).collect();
        format!("…{}", tail.chars().rev().collect::<String>())
    } else {
        format!("{:>width$}", value)
    };
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    };
    Span::styled(format!(" {} ", text), style)
}

pub(crate) fn draw_rows(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Inequalities ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.rows.is_empty() {
        let hint = Line::from(vec![
            Span::styled("No rows. ", Style::default().fg(Color::DarkGray)),
            Span::styled("Ctrl+N ", Style::default().fg(ACCENT)),
            Span::raw("adds one."),
        ]);
        f.render_widget(Paragraph::new(hint), inner);
        return;
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(app.focus.row, visible);
    let mut lines = Vec::with_capacity(visible);
    let mut cursor: Option<Position> = None;

    for (idx, row) in app.rows.iter().enumerate().skip(offset).take(visible) {
        let is_focused_row = idx == app.focus.row;
        let valid = row.parse(idx).is_ok();
        let marker = if !valid && !is_focused_row {
            Span::styled(" ! ", Style::default().fg(Color::Red))
        } else if is_focused_row {
            Span::styled(" ▸ ", Style::default().fg(ACCENT))
        } else {
            Span::raw("   ")
        };
        let mut spans = vec![
            marker,
            Span::styled(format!("{:>3}. ", idx + 1), Style::default().fg(Color::DarkGray)),
        ];
        let mut col = inner.x + 3 + 5;

        for (i, field) in [RowField::X1, RowField::X2, RowField::X3].into_iter().enumerate() {
            let focused = is_focused_row && app.focus.field == field;
            let value = app.value(idx, field).unwrap_or("");
            // Values are right-aligned, so the cursor sits at the end of the cell.
            if focused {
                cursor = Some(Position::new(col + 1 + FIELD_WIDTH, inner.y + (idx - offset) as u16));
            }
            spans.push(cell(value, focused));
            col += FIELD_WIDTH + 2;
            let label = if i < 2 {
                format!(" {} + ", VARIABLE_LABELS[i])
            } else {
                format!(" {} ", VARIABLE_LABELS[i])
            };
            col += label.chars().count() as u16;
            spans.push(Span::styled(label, Style::default().fg(ACCENT_SECONDARY)));
        }

        let sign_focused = is_focused_row && app.focus.field == RowField::Sign;
        let sign_text = row
            .sign
            .parse::<Sign>()
            .map(|s| s.symbol().to_string())
            .unwrap_or_else(|_| row.sign.clone());
        let sign_style = if sign_focused {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT_SECONDARY)
        };
        spans.push(Span::styled(format!(" {} ", sign_text), sign_style));
        col += 3 + 1;
        spans.push(Span::raw(" "));

        let rhs_focused = is_focused_row && app.focus.field == RowField::Rhs;
        if rhs_focused {
            cursor = Some(Position::new(col + 1 + FIELD_WIDTH, inner.y + (idx - offset) as u16));
        }
        spans.push(cell(&row.rhs, rhs_focused));

        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
    if let Some(pos) = cursor
        && pos.x < inner.x + inner.width
    {
        f.set_cursor_position(pos);
    }
}
