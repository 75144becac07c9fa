use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("reading dataset file: {0}")]
    Io(#[from] io::Error),
}

/// Read every line of `path`, trimming each line's own leading and trailing
/// whitespace. Order is preserved; empty lines stay as empty strings.
///
/// `str::lines` splits on `\n` and drops a trailing `\r`, so CRLF files
/// behave the same as LF files (the per-line trim would catch it anyway).
pub fn load_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io(e)
        }
    })?;

    Ok(text.lines().map(|line| line.trim().to_string()).collect())
}
