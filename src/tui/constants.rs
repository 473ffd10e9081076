//! TUI constants: colors, timing, and layout sizes.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent — soft cyan (#7EC8E3) that pairs well with the green.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Width of one numeric input cell (without the variable label).
pub(crate) const FIELD_WIDTH: u16 = 8;

/// Height of the command preview block (borders included).
pub(crate) const PREVIEW_LINES: u16 = 6;

/// Variable labels following each coefficient field.
pub(super) const VARIABLE_LABELS: [&str; 3] = ["x1", "x2", "x3"];
