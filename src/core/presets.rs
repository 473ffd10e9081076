//! Built-in example systems, loaded from `config/presets.json` (embedded at compile time).

use std::sync::OnceLock;

use serde::Deserialize;

use crate::core::rows::RowSet;
use crate::core::source;

/// A named example system of inequalities.
#[derive(Clone, Debug, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    /// Rows in the text format (`a b c SIGN rhs`).
    pub rows: Vec<String>,
}

/// Preset that cannot be turned into rows.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("unknown preset '{0}' (see `sage-visu presets`)")]
    Unknown(String),
    #[error("preset '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: source::SourceError,
    },
}

fn load_presets() -> Vec<Preset> {
    let json = include_str!("../../config/presets.json");
    serde_json::from_str(json).expect("presets.json must be valid")
}

static PRESETS: OnceLock<Vec<Preset>> = OnceLock::new();

/// Returns all presets, loading them on first access.
pub fn presets() -> &'static [Preset] {
    PRESETS.get_or_init(load_presets)
}

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    presets().iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

impl Preset {
    /// Rows of this preset as an editable row set.
    pub fn row_set(&self) -> Result<RowSet, PresetError> {
        source::parse_text(&self.rows.join("\n")).map_err(|source| PresetError::Invalid {
            name: self.name.clone(),
            source,
        })
    }
}

/// Look up a preset by name and load its rows.
pub fn load(name: &str) -> Result<RowSet, PresetError> {
    find(name)
        .ok_or_else(|| PresetError::Unknown(name.to_string()))?
        .row_set()
}
