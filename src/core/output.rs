//! Delivery of the generated command: stdout, a file, or the system clipboard.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the generated command goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
    Clipboard,
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("Clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), OutputError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

/// Deliver `text` to the sink. Files and stdout get a trailing newline.
pub fn deliver(sink: &Sink, text: &str) -> Result<(), OutputError> {
    match sink {
        Sink::Stdout => {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", text)?;
            out.flush()?;
        }
        Sink::File(path) => {
            fs::write(path, format!("{}\n", text))?;
            log::info!("wrote command to {}", path.display());
        }
        Sink::Clipboard => {
            copy_to_clipboard(text)?;
            log::info!("copied command to clipboard ({} bytes)", text.len());
        }
    }
    Ok(())
}
