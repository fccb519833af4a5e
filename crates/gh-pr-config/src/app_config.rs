//! Application configuration
//!
//! Resolved once at startup from, highest precedence first: the process
//! environment, a `.env` file, the optional TOML config file and defaults.
//! Command line overrides are applied by the caller afterwards.

use crate::config_file::{load_config_file, ConfigFile};
use crate::error::ConfigError;
use crate::repository::{RepositoryId, PLACEHOLDER_REPOSITORY};
use std::fmt;

pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_TOKEN_FALLBACK: &str = "GH_TOKEN";
pub const ENV_REPOSITORY: &str = "GITHUB_REPO";
pub const ENV_BASE_BRANCH: &str = "GITHUB_BASE_BRANCH";
pub const ENV_ISSUE_PREFIX: &str = "PR_ISSUE_PREFIX";

pub const DEFAULT_BASE_BRANCH: &str = "main";
pub const DEFAULT_ISSUE_PREFIX: &str = "CAL";

/// Everything the chores need to talk to one repository
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GitHub access token
    pub token: String,

    /// Repository all commands operate on
    pub repository: RepositoryId,

    /// Branch PRs target and are refreshed from
    pub base_branch: String,

    /// Issue tracker key rendered as `Fixes {issue_prefix}-{ticket}`
    pub issue_prefix: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .field("base_branch", &self.base_branch)
            .field("issue_prefix", &self.issue_prefix)
            .finish()
    }
}

impl AppConfig {
    /// Load `.env`, the config file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
            Err(_) => log::debug!(".env file not found, will rely on environment variables"),
        }

        let file = load_config_file();
        Self::resolve(|key| std::env::var(key).ok(), file)
    }

    /// Build the config from an environment lookup and a parsed config file
    ///
    /// Empty environment values count as unset.
    pub fn resolve<F>(env: F, file: ConfigFile) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let token = lookup(ENV_TOKEN)
            .or_else(|| lookup(ENV_TOKEN_FALLBACK))
            .ok_or(ConfigError::MissingToken)?;

        let repository = lookup(ENV_REPOSITORY)
            .or(file.repository)
            .unwrap_or_else(|| PLACEHOLDER_REPOSITORY.to_string());
        let repository = RepositoryId::parse(&repository)?;
        if repository.is_placeholder() {
            log::warn!(
                "No repository configured, using placeholder '{}'. Set {} to fix this.",
                PLACEHOLDER_REPOSITORY,
                ENV_REPOSITORY
            );
        }

        let base_branch = lookup(ENV_BASE_BRANCH)
            .or(file.base_branch)
            .unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string());

        let issue_prefix = lookup(ENV_ISSUE_PREFIX)
            .or(file.issue_prefix)
            .unwrap_or_else(|| DEFAULT_ISSUE_PREFIX.to_string());

        Ok(Self {
            token,
            repository,
            base_branch,
            issue_prefix,
        })
    }
}
