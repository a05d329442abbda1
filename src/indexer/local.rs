//! Local checkout backend, for indexing without the API

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::source::{EntryKind, RepoEntry, RepositorySource};

pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RepositorySource for LocalRepository {
    /// Entries sorted by name, like the API; `.git` is left out
    fn list_directory(&self, path: &str) -> Result<Vec<RepoEntry>> {
        let dir = self.root.join(path);
        let read_dir = fs::read_dir(&dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.context("Failed to read directory entry")?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name == ".git" {
                continue;
            }

            let file_type = entry.file_type().context("Failed to read file type")?;
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_symlink() {
                EntryKind::Symlink
            } else {
                EntryKind::Other
            };

            let path = if path.is_empty() { name.clone() } else { format!("{}/{}", path, name) };
            entries.push(RepoEntry { name, path, kind, download_url: None });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, entry: &RepoEntry) -> Result<Vec<u8>> {
        let path = self.root.join(&entry.path);
        fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
