use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_NAME: &str = "UI-template";
const DEFAULT_OWNER: &str = "nirav2000";
const DEFAULT_DESCRIPTION: &str = "A visual UI Design System Generator to create and export design specifications for consistent app development";
const DEFAULT_HOMEPAGE: &str = "https://github.com";

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_HOST: &str = "github.com";

const DEFAULT_BRANCH: &str = "main";
const DEFAULT_REMOTE: &str = "origin";

/// Validation failures for a provisioning config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config: `{0}` must not be empty")]
    Empty(&'static str),

    #[error("Invalid repository name '{0}': must not contain '/' or whitespace")]
    InvalidName(String),

    #[error("Invalid api_url '{0}': must start with http:// or https://")]
    InvalidApiUrl(String),
}

/// The repository to create.
///
/// Serialized as-is into the body of the create request. `owner` is only
/// used for URLs: the endpoint always creates under the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryDescriptor {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing)]
    pub owner: String,
    pub homepage: String,
    pub private: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub auto_init: bool,
}

impl Default for RepositoryDescriptor {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            private: false,
            has_issues: true,
            has_projects: true,
            has_wiki: true,
            auto_init: false,
        }
    }
}

impl RepositoryDescriptor {
    /// "owner/name"
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitHubConfig {
    /// REST API base, without trailing slash.
    pub api_url: String,
    /// Web/git host used for repository and remote URLs.
    pub host: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushConfig {
    pub branch: String,
    /// Remote used when no credential is available to embed in a URL.
    pub remote: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

/// Everything a provisioning run needs to know besides the credential.
///
/// Every field has a default, so an empty file (or no file at all) gives
/// the built-in repository.
///
/// ```toml
/// next_steps = ["cargo build", "cargo test"]
///
/// [repository]
/// name = "my-tool"
/// owner = "me"
/// private = true
///
/// [push]
/// branch = "trunk"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProvisionConfig {
    pub repository: RepositoryDescriptor,
    pub github: GitHubConfig,
    pub push: PushConfig,
    /// Usage hints printed after a successful push.
    pub next_steps: Vec<String>,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            repository: RepositoryDescriptor::default(),
            github: GitHubConfig::default(),
            push: PushConfig::default(),
            next_steps: vec![
                "npm install".to_string(),
                "npm run dev".to_string(),
                "Open http://localhost:5173".to_string(),
            ],
        }
    }
}

impl ProvisionConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: ProvisionConfig =
            toml::from_str(content).context("Failed to parse provisioning config")?;

        config.validate()?;
        Ok(config)
    }

    /// Built-in defaults, or the given file when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("repository.name", &self.repository.name),
            ("repository.owner", &self.repository.owner),
            ("github.api_url", &self.github.api_url),
            ("github.host", &self.github.host),
            ("push.branch", &self.push.branch),
            ("push.remote", &self.push.remote),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(field));
            }
        }

        let name = &self.repository.name;
        if name.contains('/') || name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidName(name.clone()));
        }

        let api_url = &self.github.api_url;
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(api_url.clone()));
        }

        Ok(())
    }

    /// Public web URL of the repository.
    pub fn repository_url(&self) -> String {
        format!(
            "https://{}/{}",
            self.github.host,
            self.repository.full_name()
        )
    }
}
