//! Index persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::ChatIndex;

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the index as two-space pretty JSON, replacing any previous file atomically
pub fn save_index(path: &Path, index: &ChatIndex) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Write atomically (temp file + rename)
    let temp = temp_path_for(path);
    let json = serde_json::to_string_pretty(index).context("Failed to serialize index")?;
    fs::write(&temp, json).context("Failed to write index temp file")?;
    fs::rename(&temp, path).context("Failed to rename index temp file")?;

    Ok(())
}

/// Load a previously written index
pub fn load_index(path: &Path) -> Result<ChatIndex> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse index JSON")
}
