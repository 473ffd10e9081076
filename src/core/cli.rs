//! CLI-only commands: render, normalize, presets, config.
//!
//! These run without opening the TUI and produce plain text output.

use std::path::Path;

use crate::core::command::{self, RenderOptions, format_number};
use crate::core::config::{self, Config};
use crate::core::inequality::normalize_all;
use crate::core::output::{self, Sink};
use crate::core::paths;
use crate::core::presets;
use crate::core::rows::RowSet;
use crate::core::source::{self, Format, SourceError};

/// Row sources for a one-shot command, combined in order: preset, file, inline rows.
#[derive(Debug, Default)]
pub struct RowsRequest<'a> {
    pub preset: Option<&'a str>,
    pub file: Option<&'a Path>,
    pub rows: &'a [String],
    pub format: Option<Format>,
}

/// Collect rows from every requested source.
pub fn collect_rows(req: &RowsRequest<'_>) -> Result<RowSet, Box<dyn std::error::Error>> {
    let mut rows = match req.preset {
        Some(name) => presets::load(name)?,
        None => RowSet::new(),
    };
    if let Some(path) = req.file {
        let content = source::read_input(path)?;
        for row in &source::parse(&content, req.format)? {
            rows.push(row.clone());
        }
    }
    for (i, line) in req.rows.iter().enumerate() {
        let row = source::parse_line(line).map_err(|message| SourceError::Syntax {
            line: i + 1,
            message: format!("--row '{}': {}", line, message),
        })?;
        rows.push(row);
    }
    log::debug!("collected {} rows", rows.len());
    Ok(rows)
}

/// Run the `render` command: generate the command text and deliver it.
pub fn run_render(
    req: &RowsRequest<'_>,
    opts: &RenderOptions,
    sink: &Sink,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = collect_rows(req)?;
    let text = command::generate(&rows, opts)?;
    output::deliver(sink, &text)?;
    if *sink == Sink::Clipboard {
        eprintln!("{}", copied_message(rows.len()));
    }
    Ok(())
}

/// Counts input rows; an equality row still counts once.
fn copied_message(rows: usize) -> String {
    format!("Copied {} row(s) to clipboard", rows)
}

/// Run the `normalize` command: print canonical constraints.
pub fn run_normalize(req: &RowsRequest<'_>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows = collect_rows(req)?;
    let inequalities = rows.parse_all()?;
    let constraints = normalize_all(&inequalities);
    if json {
        println!("{}", serde_json::to_string_pretty(&constraints)?);
        return Ok(());
    }
    for c in &constraints {
        let parts: Vec<String> = c.tuple().iter().map(|v| format_number(*v)).collect();
        println!("[{}]", parts.join(","));
    }
    Ok(())
}

/// Run the `presets` command: list built-in examples.
pub fn run_presets() {
    let presets = presets::presets();
    let name_w = presets
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(10)
        .max(10);

    println!("{:<name_w$}  {:>4}  Description", "Name", "Rows");
    println!("{}  ----  -----------", "-".repeat(name_w));
    for p in presets {
        println!("{:<name_w$}  {:>4}  {}", p.name, p.rows.len(), p.description);
    }
    println!();
    println!("Descriptions hold as plotted by Sage with --convention offset.");
}

/// Run the `config` command: display effective settings and paths.
pub fn run_config(config: &Config) {
    let cache_dir = paths::cache_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let log_path = paths::log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let render = &config.render;

    println!("Cache:          {}", cache_dir);
    println!("TUI log:        {}", log_path);
    println!(
        "Convention:     {} ({})",
        render.convention.as_str(),
        source_of(config::ENV_CONVENTION)
    );
    println!(
        "Trailing comma: {} ({})",
        render.trailing_comma,
        source_of(config::ENV_TRAILING_COMMA)
    );
    println!(
        "Plot suffix:    {} ({})",
        render.plot,
        source_of(config::ENV_PLOT)
    );
}

fn source_of(key: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => format!("from {}", key),
        _ => "default".to_string(),
    }
}
