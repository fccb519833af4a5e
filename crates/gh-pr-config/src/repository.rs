//! Repository identifier

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Placeholder used when no repository is configured
pub const PLACEHOLDER_REPOSITORY: &str = "owner/repo";

/// A GitHub repository as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    /// GitHub organization or user name
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepositoryId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `owner/name`; both parts must be non-empty and there must be
    /// exactly one slash
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        match value.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(ConfigError::InvalidRepository(value.to_string())),
        }
    }

    /// Whether this is still the unconfigured placeholder
    pub fn is_placeholder(&self) -> bool {
        self.to_string() == PLACEHOLDER_REPOSITORY
    }
}

impl FromStr for RepositoryId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
