//! Row sources: the line-oriented text format and JSON.
//!
//! Text: one inequality per line, `a b c SIGN rhs`. Blank lines and `#` comments are skipped.
//! JSON: `[{"coeffs": [a, b, c], "sign": "<=", "rhs": r}, ...]`, numbers as JSON numbers or strings.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::core::inequality::DIM;
use crate::core::rows::{RawRow, RowSet};

/// Errors reading or parsing a row source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Input format of a row source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    /// JSON when the first non-space character is `[`, text otherwise.
    pub fn detect(input: &str) -> Format {
        if input.trim_start().starts_with('[') {
            Format::Json
        } else {
            Format::Text
        }
    }
}

/// Comparison operators; padded with spaces so `1 0 0<=2` splits like `1 0 0 <= 2`.
fn sign_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(<=|>=|==|!=|≤|≥|=)").expect("sign regex is valid"))
}

/// Parse a single text line (without comment handling).
pub fn parse_line(line: &str) -> Result<RawRow, String> {
    let spaced = sign_regex().replace_all(line, " $1 ");
    let fields: Vec<&str> = spaced.split_whitespace().collect();
    if fields.len() != DIM + 2 {
        return Err(format!(
            "expected 'a b c SIGN rhs' ({} fields), got {}",
            DIM + 2,
            fields.len()
        ));
    }
    Ok(RawRow::new(
        [fields[0], fields[1], fields[2]],
        fields[3],
        fields[4],
    ))
}

/// Parse the text format into rows. Values are validated later, when the rows are parsed.
pub fn parse_text(input: &str) -> Result<RowSet, SourceError> {
    let mut rows = RowSet::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = parse_line(line).map_err(|message| SourceError::Syntax {
            line: i + 1,
            message,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonValue {
    Number(f64),
    Text(String),
}

impl JsonValue {
    fn into_text(self) -> String {
        match self {
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonRow {
    coeffs: [JsonValue; DIM],
    sign: String,
    rhs: JsonValue,
}

/// Parse the JSON format into rows.
pub fn parse_json(input: &str) -> Result<RowSet, SourceError> {
    let entries: Vec<JsonRow> = serde_json::from_str(input)?;
    Ok(RowSet::from_rows(
        entries
            .into_iter()
            .map(|e| {
                let [a, b, c] = e.coeffs;
                RawRow {
                    coeffs: [a.into_text(), b.into_text(), c.into_text()],
                    sign: e.sign,
                    rhs: e.rhs.into_text(),
                }
            })
            .collect(),
    ))
}

/// Parse rows using the given format, or auto-detect it.
pub fn parse(input: &str, format: Option<Format>) -> Result<RowSet, SourceError> {
    match format.unwrap_or_else(|| Format::detect(input)) {
        Format::Text => parse_text(input),
        Format::Json => parse_json(input),
    }
}

/// Read a source file; `-` means stdin.
pub fn read_input(path: &Path) -> Result<String, SourceError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_skips_blank_and_comment_lines() {
        let rows = parse_text("# header\n\n1 0 0 <= 2\n  \n0 1 0 >= -1\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows.get(1),
            Some(&RawRow::new(["0", "1", "0"], ">=", "-1"))
        );
    }

    #[test]
    fn text_splits_sign_without_spaces() {
        let row = parse_line("1 0 0<=2").unwrap();
        assert_eq!(row, RawRow::new(["1", "0", "0"], "<=", "2"));
        let row = parse_line("1 2 3 ≥ -4.5").unwrap();
        assert_eq!(row, RawRow::new(["1", "2", "3"], "≥", "-4.5"));
    }

    #[test]
    fn text_keeps_unknown_sign_for_later_validation() {
        let row = parse_line("1 0 0 != 5").unwrap();
        assert_eq!(row.sign, "!=");
        assert!(row.parse(0).is_err());
    }

    #[test]
    fn text_wrong_field_count_reports_line() {
        let err = parse_text("1 0 0 <= 2\n1 0 <= 2\n").unwrap_err();
        match err {
            SourceError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Syntax, got {:?}", other),
        }
    }

    #[test]
    fn json_accepts_numbers_and_strings() {
        let rows = parse_json(
            r#"[{"coeffs": [1, "0", 0.5], "sign": "<=", "rhs": 2},
                {"coeffs": [0, 1, 0], "sign": "=", "rhs": "-1"}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.get(0), Some(&RawRow::new(["1", "0", "0.5"], "<=", "2")));
        assert_eq!(rows.get(1), Some(&RawRow::new(["0", "1", "0"], "=", "-1")));
    }

    #[test]
    fn json_rejects_wrong_arity() {
        let err = parse_json(r#"[{"coeffs": [1, 0], "sign": "<=", "rhs": 2}]"#).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn detect_format() {
        assert_eq!(Format::detect("  [ ]"), Format::Json);
        assert_eq!(Format::detect("1 0 0 <= 2"), Format::Text);
        let rows = parse("[]", None).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.txt");
        std::fs::write(&path, "1 0 0 <= 2\n").unwrap();
        let content = read_input(&path).unwrap();
        assert_eq!(parse(&content, None).unwrap().len(), 1);
    }
}
