//! Line readers for local prefix lists.

use std::error::Error;
use std::path::Path;

/// Split text into trimmed, non-empty lines.
pub fn read_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a file into trimmed, non-empty lines.
pub fn read_file_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading file {}: {e}", path.display()))?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(read_lines(&text))
}
