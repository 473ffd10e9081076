//! Rendering of the `Polyhedron(ieqs = [...]).plot()` command text.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::Serialize;

use crate::core::inequality::{CanonicalConstraint, normalize_all};
use crate::core::rows::{RowError, RowSet};

const PREFIX: &str = "Polyhedron(ieqs = [";
const SUFFIX: &str = "])";
const PLOT: &str = ".plot()";

/// How a canonical constraint maps onto a `[b, a1, a2, a3]` tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Emit the canonical `(rhs, coeffs)` unchanged.
    #[default]
    Bound,
    /// Emit `b + a·x ≥ 0`: the rhs entry is negated.
    Offset,
}

impl Convention {
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::Bound => "bound",
            Convention::Offset => "offset",
        }
    }

    fn apply(self, c: &CanonicalConstraint) -> [f64; 4] {
        let mut t = c.tuple();
        if self == Convention::Offset {
            t[0] = -t[0];
        }
        t
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bound" => Ok(Convention::Bound),
            "offset" => Ok(Convention::Offset),
            other => Err(format!("unknown convention '{}' (expected bound or offset)", other)),
        }
    }
}

/// Output shape options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    pub convention: Convention,
    /// Emit `,` after every tuple, including the last one.
    pub trailing_comma: bool,
    /// Append `.plot()`.
    pub plot: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            convention: Convention::Bound,
            trailing_comma: true,
            plot: true,
        }
    }
}

/// Format a number the way the widget expects: no `.0` on integers, no `-0`.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    v.to_string()
}

/// Render canonical constraints as command text.
pub fn render(constraints: &[CanonicalConstraint], opts: &RenderOptions) -> String {
    let mut out = String::from(PREFIX);
    for (i, c) in constraints.iter().enumerate() {
        if i > 0 && !opts.trailing_comma {
            out.push(',');
        }
        let [b, a1, a2, a3] = opts.convention.apply(c);
        let _ = write!(
            out,
            "[{},{},{},{}]",
            format_number(b),
            format_number(a1),
            format_number(a2),
            format_number(a3)
        );
        if opts.trailing_comma {
            out.push(',');
        }
    }
    out.push_str(SUFFIX);
    if opts.plot {
        out.push_str(PLOT);
    }
    out
}

/// Parse, normalize and render a whole row set. Any invalid row aborts.
pub fn generate(rows: &RowSet, opts: &RenderOptions) -> Result<String, RowError> {
    let inequalities = rows.parse_all()?;
    let constraints = normalize_all(&inequalities);
    Ok(render(&constraints, opts))
}
