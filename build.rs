//! Build script: validates presets.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let presets_path: PathBuf = [&manifest_dir, "config", "presets.json"].iter().collect();
    println!("cargo:rerun-if-changed={}", presets_path.display());
    let json = std::fs::read_to_string(&presets_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. presets.json must exist and be valid.",
            presets_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct PresetEntry {
        name: String,
        description: String,
        rows: Vec<String>,
    }
    let entries: Vec<PresetEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "presets.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    for entry in &entries {
        if entry.name.trim().is_empty() {
            panic!("presets.json: preset name cannot be empty");
        }
        if entry.rows.is_empty() {
            panic!("presets.json: preset '{}' has no rows", entry.name);
        }
    }
}
