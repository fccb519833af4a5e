//! Errors surfaced by the chores

use crate::branch::VALID_PREFIXES;
use gh_client::RemoteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChoresError {
    /// The branch does not follow `{prefix}/{description}`.
    #[error(
        "Branch name '{branch}' must start with one of {} followed by '/' and description. Example: feat/new-feature",
        VALID_PREFIXES.join(", ")
    )]
    InvalidBranchName { branch: String },

    /// GitHub rejected or failed a call.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}
