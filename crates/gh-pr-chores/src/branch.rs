//! PR titles derived from branch names
//!
//! Branches follow `{prefix}/{description}`, e.g. `feat/new-login-page`,
//! which becomes the conventional-commit style title `feat: new login page`.

use crate::error::ChoresError;
use regex::Regex;
use std::sync::OnceLock;

/// Branch prefixes accepted for generated titles
pub const VALID_PREFIXES: [&str; 4] = ["feat", "fix", "chore", "perf"];

/// Generate a standardized PR title from a branch name
///
/// Hyphens in the description become spaces and the description is
/// lowercased; the prefix must match exactly.
pub fn generate_title(branch: &str) -> Result<String, ChoresError> {
    static BRANCH_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = BRANCH_REGEX.get_or_init(|| Regex::new(r"^(feat|fix|chore|perf)/(.+)$").unwrap());

    let captures = re
        .captures(branch)
        .ok_or_else(|| ChoresError::InvalidBranchName {
            branch: branch.to_string(),
        })?;

    let prefix = &captures[1];
    let description = captures[2].replace('-', " ").to_lowercase();

    Ok(format!("{}: {}", prefix, description))
}
