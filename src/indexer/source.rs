use anyhow::Result;
use serde::Deserialize;

/// One entry of a repository directory listing
///
/// Field names follow the GitHub contents API so listings deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoEntry {
    pub name: String,
    /// Path from the repository root, `/`-separated
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

impl RepoEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Read-only view of the chat corpus repository
pub trait RepositorySource {
    /// List a directory; `""` is the repository root
    fn list_directory(&self, path: &str) -> Result<Vec<RepoEntry>>;

    /// Fetch the raw bytes of a file entry
    fn read_file(&self, entry: &RepoEntry) -> Result<Vec<u8>>;
}
