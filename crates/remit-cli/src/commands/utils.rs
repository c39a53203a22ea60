//! Shared setup helpers for command implementations.

use anyhow::{Context, Result};
use remit_github::{Auth, GitHubClient};

use crate::config::{self, Config};

/// Load config, resolve the target repository, and build an API client.
///
/// Repository resolution runs before authentication so argument mistakes
/// surface without touching the token or the network.
pub fn setup(repo_flag: Option<&str>) -> Result<(Config, String, String, GitHubClient)> {
    let config = Config::load(Config::FILE_NAME)?;
    let (owner, repo) = config::resolve_repo(repo_flag, &config)?;
    let client = build_client(&config)?;
    Ok((config, owner, repo, client))
}

/// Build a GitHub client, honoring a configured Enterprise API URL.
fn build_client(config: &Config) -> Result<GitHubClient> {
    let auth = Auth::auto();
    match &config.github.api_url {
        Some(url) => GitHubClient::with_base_url(&auth, url.clone()),
        None => GitHubClient::new(&auth),
    }
    .context("Failed to authenticate with GitHub")
}
