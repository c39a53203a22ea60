//! Configuration management for remit.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Remit configuration loaded from `.remit.toml` in the working directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// GitHub-specific settings.
    #[serde(default)]
    pub github: GitHubConfig,
}

impl Config {
    /// Config file name, looked up in the working directory.
    pub const FILE_NAME: &'static str = ".remit.toml";

    /// Load config from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}

/// General remit settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Branch used when no `--base`/`--branch` flag is given.
    #[serde(default = "default_base_branch")]
    pub base_branch: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            base_branch: default_base_branch(),
        }
    }
}

fn default_base_branch() -> String {
    "master".into()
}

/// GitHub-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GitHubConfig {
    /// Default repository as `owner/name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Custom API URL for GitHub Enterprise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Resolve the target repository from the `--repo` flag or config.
///
/// # Errors
/// Returns error if neither source names a repository, or the spec is
/// not of the form `owner/name`.
pub fn resolve_repo(flag: Option<&str>, config: &Config) -> Result<(String, String)> {
    let Some(spec) = flag.or_else(|| config.github.repo.as_deref()) else {
        bail!(
            "no repository configured - pass --repo <owner/name> or set `repo` under [github] in {}",
            Config::FILE_NAME
        );
    };
    parse_repo(spec)
}

/// Split an `owner/name` spec into its parts.
///
/// # Errors
/// Returns error unless the spec is exactly two non-empty segments.
pub fn parse_repo(spec: &str) -> Result<(String, String)> {
    match spec.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => bail!("invalid repository '{spec}' - expected owner/name"),
    }
}
