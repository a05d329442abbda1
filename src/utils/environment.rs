use std::env;

use anyhow::{Result, bail};

/// Environment variable holding the GitHub API token
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Read the GitHub token; unset and empty are both configuration errors
pub fn get_github_token() -> Result<String> {
    match env::var(GITHUB_TOKEN_VAR) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => bail!("{} environment variable is required", GITHUB_TOKEN_VAR),
    }
}
