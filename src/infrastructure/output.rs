use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes the raw response body to `path`, replacing any existing file.
pub fn save_response(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body.as_bytes())
        .with_context(|| format!("Failed to write response to {}", path.display()))
}
