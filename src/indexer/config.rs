use std::path::PathBuf;

pub const DEFAULT_REPOSITORY: &str = "Casualtek/Ransomchats";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub const INDEX_FILENAME: &str = "chat_index.json";

/// Top-level directories that hold tooling rather than a group's chats
pub const RESERVED_DIRS: [&str; 2] = ["parsers", ".github"];

/// Where the indexer reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// `owner/name`
    pub repository: String,
    pub branch: String,
    pub api_base: String,
    pub raw_base: String,
    pub reserved_dirs: Vec<String>,
    pub output_path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            reserved_dirs: RESERVED_DIRS.iter().map(|d| d.to_string()).collect(),
            output_path: PathBuf::from(INDEX_FILENAME),
        }
    }
}

impl IndexConfig {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_dirs.iter().any(|d| d == name)
    }

    /// Raw download link for a chat file; built from the template, never fetched
    pub fn raw_url(&self, group: &str, filename: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base.trim_end_matches('/'),
            self.repository,
            self.branch,
            group,
            filename
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_url_template() {
        let config = IndexConfig::default();
        assert_eq!(
            config.raw_url("blackbasta", "chat 1.json"),
            "https://raw.githubusercontent.com/Casualtek/Ransomchats/main/blackbasta/chat 1.json"
        );
    }

    #[test]
    fn test_reserved_dirs() {
        let config = IndexConfig::default();
        assert!(config.is_reserved("parsers"));
        assert!(config.is_reserved(".github"));
        assert!(!config.is_reserved("hive"));
    }
}
