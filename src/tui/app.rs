//! TUI application state: rows, focused field, preview, status line.

use std::time::{Duration, Instant};

use crate::core::command::{self, RenderOptions};
use crate::core::field;
use crate::core::inequality::Sign;
use crate::core::output;
use crate::core::presets;
use crate::core::rows::{RawRow, RowSet};

/// Editable fields of a row, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    X1,
    X2,
    X3,
    Sign,
    Rhs,
}

impl RowField {
    pub const ALL: [RowField; 5] = [
        RowField::X1,
        RowField::X2,
        RowField::X3,
        RowField::Sign,
        RowField::Rhs,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn is_numeric(self) -> bool {
        self != RowField::Sign
    }
}

/// Focused cell: row index and field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub row: usize,
    pub field: RowField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    pub(crate) rows: RowSet,
    pub(crate) focus: Focus,
    pub(crate) render: RenderOptions,
    /// Command for the current rows, or the error that prevents it.
    pub(crate) preview: Result<String, String>,
    pub(crate) status: Option<Status>,
    /// Last command produced by an explicit plot; printed on exit.
    pub(crate) last_command: Option<String>,
    /// Index of the preset loaded last with Ctrl+P.
    pub(crate) preset_index: Option<usize>,
    /// When set, show "Copied" toast until this instant.
    pub(crate) copy_toast_until: Option<Instant>,
}

fn field_value(row: &RawRow, f: RowField) -> &str {
    match f {
        RowField::X1 => &row.coeffs[0],
        RowField::X2 => &row.coeffs[1],
        RowField::X3 => &row.coeffs[2],
        RowField::Sign => &row.sign,
        RowField::Rhs => &row.rhs,
    }
}

fn field_value_mut(row: &mut RawRow, f: RowField) -> &mut String {
    match f {
        RowField::X1 => &mut row.coeffs[0],
        RowField::X2 => &mut row.coeffs[1],
        RowField::X3 => &mut row.coeffs[2],
        RowField::Sign => &mut row.sign,
        RowField::Rhs => &mut row.rhs,
    }
}

impl App {
    pub fn new(render: RenderOptions) -> Self {
        let mut app = Self {
            rows: RowSet::with_blank_row(),
            focus: Focus {
                row: 0,
                field: RowField::X1,
            },
            render,
            preview: Ok(String::new()),
            status: None,
            last_command: None,
            preset_index: None,
            copy_toast_until: None,
        };
        app.enter_field();
        app.refresh_preview();
        app
    }

    pub(crate) fn value(&self, row: usize, f: RowField) -> Option<&str> {
        self.rows.get(row).map(|r| field_value(r, f))
    }

    fn focused_mut(&mut self) -> Option<&mut String> {
        let Focus { row, field } = self.focus;
        self.rows.get_mut(row).map(|r| field_value_mut(r, field))
    }

    fn enter_field(&mut self) {
        if self.focus.field.is_numeric()
            && let Some(v) = self.focused_mut()
        {
            *v = field::focus_in(v);
        }
    }

    fn leave_field(&mut self) {
        if self.focus.field.is_numeric()
            && let Some(v) = self.focused_mut()
        {
            *v = field::focus_out(v);
        }
    }

    /// Move focus, applying the blur/focus convention to the fields involved.
    pub(crate) fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        self.leave_field();
        self.focus = focus;
        self.enter_field();
        self.refresh_preview();
    }

    pub(crate) fn next_field(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let pos = self.focus.field.position();
        let focus = if pos + 1 < RowField::ALL.len() {
            Focus {
                row: self.focus.row,
                field: RowField::ALL[pos + 1],
            }
        } else {
            Focus {
                row: (self.focus.row + 1) % self.rows.len(),
                field: RowField::ALL[0],
            }
        };
        self.set_focus(focus);
    }

    pub(crate) fn prev_field(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let pos = self.focus.field.position();
        let focus = if pos > 0 {
            Focus {
                row: self.focus.row,
                field: RowField::ALL[pos - 1],
            }
        } else {
            Focus {
                row: (self.focus.row + self.rows.len() - 1) % self.rows.len(),
                field: RowField::ALL[RowField::ALL.len() - 1],
            }
        };
        self.set_focus(focus);
    }

    pub(crate) fn row_up(&mut self) {
        if self.focus.row > 0 {
            self.set_focus(Focus {
                row: self.focus.row - 1,
                field: self.focus.field,
            });
        }
    }

    pub(crate) fn row_down(&mut self) {
        if self.focus.row + 1 < self.rows.len() {
            self.set_focus(Focus {
                row: self.focus.row + 1,
                field: self.focus.field,
            });
        }
    }

    /// Append a blank row and focus its first coefficient.
    pub(crate) fn add_row(&mut self) {
        self.leave_field();
        let row = self.rows.add_blank();
        self.focus = Focus {
            row,
            field: RowField::X1,
        };
        self.enter_field();
        self.refresh_preview();
    }

    /// Remove the focused row. Focus stays at the same index when possible.
    pub(crate) fn remove_row(&mut self) {
        if self.rows.remove(self.focus.row).is_none() {
            return;
        }
        if self.focus.row >= self.rows.len() {
            self.focus.row = self.rows.len().saturating_sub(1);
        }
        self.enter_field();
        self.refresh_preview();
    }

    /// Type a character into the focused field.
    pub(crate) fn input_char(&mut self, c: char) {
        if self.focus.field == RowField::Sign {
            let sign = match c {
                '<' => Some(Sign::Le),
                '>' => Some(Sign::Ge),
                '=' => Some(Sign::Eq),
                ' ' => Some(self.focused_sign().next()),
                _ => None,
            };
            if let Some(sign) = sign {
                self.set_sign(sign);
            }
            return;
        }
        if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return;
        }
        if let Some(v) = self.focused_mut() {
            v.push(c);
        }
        self.refresh_preview();
    }

    pub(crate) fn backspace(&mut self) {
        if !self.focus.field.is_numeric() {
            return;
        }
        if let Some(v) = self.focused_mut() {
            v.pop();
        }
        self.refresh_preview();
    }

    fn focused_sign(&self) -> Sign {
        self.value(self.focus.row, RowField::Sign)
            .and_then(|s| s.parse().ok())
            .unwrap_or(Sign::Le)
    }

    fn set_sign(&mut self, sign: Sign) {
        if let Some(row) = self.rows.get_mut(self.focus.row) {
            row.sign = sign.as_str().to_string();
        }
        self.refresh_preview();
    }

    /// Cycle the sign selector of the focused row (only when the sign field is focused).
    pub(crate) fn cycle_sign(&mut self, forward: bool) {
        if self.focus.field != RowField::Sign || self.rows.is_empty() {
            return;
        }
        let current = self.focused_sign();
        self.set_sign(if forward { current.next() } else { current.prev() });
    }

    /// Rows as they will be once the focused field loses focus.
    fn settled_rows(&self) -> RowSet {
        let mut rows = self.rows.clone();
        let Focus { row, field: f } = self.focus;
        if f.is_numeric()
            && let Some(r) = rows.get_mut(row)
        {
            let v = field_value_mut(r, f);
            *v = field::focus_out(v);
        }
        rows
    }

    pub(crate) fn refresh_preview(&mut self) {
        self.preview = command::generate(&self.settled_rows(), &self.render).map_err(|e| e.to_string());
    }

    /// Generate the command from the current rows. Invalid rows abort with a status error.
    pub(crate) fn plot(&mut self) -> Option<String> {
        match command::generate(&self.settled_rows(), &self.render) {
            Ok(text) => {
                let n = self.rows.len();
                log::info!("plotted {} row(s)", n);
                self.status = Some(Status::Info(format!("Plotted {} row(s)", n)));
                self.last_command = Some(text.clone());
                Some(text)
            }
            Err(e) => {
                self.status = Some(Status::Error(e.to_string()));
                None
            }
        }
    }

    /// Plot, then copy the command to the clipboard.
    pub(crate) fn copy_command(&mut self) {
        let Some(text) = self.plot() else {
            return;
        };
        match output::copy_to_clipboard(&text) {
            Ok(()) => {
                self.copy_toast_until = Some(Instant::now() + Duration::from_secs(2));
            }
            Err(e) => {
                log::warn!("clipboard copy failed: {}", e);
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    /// Replace the rows with the next built-in preset.
    pub(crate) fn next_preset(&mut self) {
        let all = presets::presets();
        if all.is_empty() {
            return;
        }
        let idx = self.preset_index.map(|i| (i + 1) % all.len()).unwrap_or(0);
        let preset = &all[idx];
        match preset.row_set() {
            Ok(rows) => {
                self.rows = rows;
                self.preset_index = Some(idx);
                self.focus = Focus {
                    row: 0,
                    field: RowField::X1,
                };
                self.enter_field();
                self.status = Some(Status::Info(format!(
                    "Preset '{}': {}",
                    preset.name, preset.description
                )));
            }
            Err(e) => self.status = Some(Status::Error(e.to_string())),
        }
        self.refresh_preview();
    }
}
