//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait: the small set of remote
//! capabilities the PR chores need. Everything above this seam works with
//! the DTOs from [`crate::types`] and never sees octocrab directly.

use crate::error::RemoteError;
use crate::types::{MergeOutcome, NewPullRequest, PullRequest};
use async_trait::async_trait;

/// Result of a GitHub API call
pub type Result<T> = std::result::Result<T, RemoteError>;

/// GitHub API client trait
///
/// Implementations can hit the API directly (`OctocrabClient`) or be test
/// doubles that record calls.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be held behind `&dyn`
/// references across await points.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::GitHubClient;
///
/// async fn my_prs(client: &dyn GitHubClient) -> gh_client::Result<usize> {
///     let login = client.current_user().await?;
///     let prs = client
///         .list_open_pull_requests_by_author("rust-lang", "rust", &login)
///         .await?;
///     Ok(prs.len())
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Login of the user the access token belongs to
    async fn current_user(&self) -> Result<String>;

    /// Fetch every open pull request authored by `login`
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `login` - Author to filter on
    ///
    /// # Returns
    ///
    /// Open PRs in the order GitHub lists them.
    async fn list_open_pull_requests_by_author(
        &self,
        owner: &str,
        repo: &str,
        login: &str,
    ) -> Result<Vec<PullRequest>>;

    /// Re-read a single pull request so GitHub reports its current mergeability
    ///
    /// Fetching a PR by number is what triggers GitHub's background
    /// mergeability job, so the result may still be `MergeableState::Unknown`.
    async fn refresh_mergeable_state(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> Result<PullRequest>;

    /// Open a new pull request
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr: &NewPullRequest,
    ) -> Result<PullRequest>;

    /// Merge `from_branch` into `head_branch` with a merge commit
    ///
    /// # Arguments
    ///
    /// * `head_branch` - Branch that receives the merge commit
    /// * `from_branch` - Branch whose commits are merged in (usually the base)
    /// * `message` - Commit message of the merge commit
    ///
    /// # Returns
    ///
    /// `MergeOutcome::AlreadyUpToDate` when there was nothing to merge.
    async fn merge_branch_into(
        &self,
        owner: &str,
        repo: &str,
        head_branch: &str,
        from_branch: &str,
        message: &str,
    ) -> Result<MergeOutcome>;
}
