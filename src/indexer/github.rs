//! GitHub contents API backend

use anyhow::{Context, Result, anyhow, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use super::config::IndexConfig;
use super::source::{RepoEntry, RepositorySource};

const USER_AGENT: &str = concat!("ransomchats/", env!("CARGO_PKG_VERSION"));

/// Body of `GET /repos/{owner}/{repo}/contents/{file}`
#[derive(Debug, Deserialize)]
struct FileContent {
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: Option<String>,
    #[serde(default)]
    download_url: Option<String>,
}

pub struct GitHubRepository {
    client: Client,
    token: String,
    api_base: String,
    repository: String,
    branch: String,
}

impl GitHubRepository {
    pub fn new(config: &IndexConfig, token: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            token,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            repository: config.repository.clone(),
            branch: config.branch.clone(),
        })
    }

    /// `{api}/repos/{owner}/{repo}/contents/{path}?ref={branch}`, path segments escaped
    pub fn contents_url(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/repos/{}/contents", self.api_base, self.repository))
            .with_context(|| format!("Invalid API base URL: {}", self.api_base))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base URL cannot take a path: {}", self.api_base))?
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        url.query_pairs_mut().append_pair("ref", &self.branch);
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<Response> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .with_context(|| format!("Request failed: {}", url))?;

        if !response.status().is_success() {
            bail!("GitHub request failed with status {}: {}", response.status(), url);
        }
        Ok(response)
    }
}

impl RepositorySource for GitHubRepository {
    fn list_directory(&self, path: &str) -> Result<Vec<RepoEntry>> {
        let url = self.contents_url(path)?;
        self.get(url)?
            .json::<Vec<RepoEntry>>()
            .with_context(|| format!("Unexpected listing for '{}'", path))
    }

    fn read_file(&self, entry: &RepoEntry) -> Result<Vec<u8>> {
        let url = self.contents_url(&entry.path)?;
        let file: FileContent = self
            .get(url)?
            .json()
            .with_context(|| format!("Unexpected file response for {}", entry.path))?;

        match inline_or_download(file, entry)? {
            FileBody::Inline(bytes) => Ok(bytes),
            FileBody::Download(raw) => {
                let raw =
                    Url::parse(&raw).with_context(|| format!("Invalid download URL: {}", raw))?;
                let bytes = self.get(raw)?.bytes().context("Failed to read download body")?;
                Ok(bytes.to_vec())
            }
        }
    }
}

/// Where a file's bytes come from once the contents API has answered
#[derive(Debug, PartialEq, Eq)]
enum FileBody {
    Inline(Vec<u8>),
    /// Raw URL still to be fetched
    Download(String),
}

/// Decoded inline base64 when present, otherwise the download URL
///
/// Files above 1MB come back without inline content. The response's own
/// `download_url` wins over the one from the directory listing.
fn inline_or_download(file: FileContent, entry: &RepoEntry) -> Result<FileBody> {
    if file.encoding.as_deref() == Some("base64") && !file.content.is_empty() {
        return decode_content(&file.content).map(FileBody::Inline);
    }

    file.download_url
        .or_else(|| entry.download_url.clone())
        .map(FileBody::Download)
        .with_context(|| format!("No content or download URL for {}", entry.path))
}

/// Decode the API's base64 body, which is wrapped with newlines every 60 characters
pub fn decode_content(content: &str) -> Result<Vec<u8>> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact).context("Invalid base64 file content")
}
