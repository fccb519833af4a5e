use thiserror::Error;

/// Errors that make the configuration unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Neither `GITHUB_TOKEN` nor `GH_TOKEN` is set.
    #[error("GITHUB_TOKEN environment variable not set. Please set it or create a .env file.")]
    MissingToken,

    /// The repository is not of the form `owner/name`.
    #[error("Invalid repository '{0}', expected 'owner/name'")]
    InvalidRepository(String),
}
