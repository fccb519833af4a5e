//! GitHub API data transfer objects
//!
//! These types represent the data read from and sent to the GitHub API.
//! They are intentionally separate from octocrab's models so the chores
//! logic never depends on the shape of a particular client library.

/// An open pull request from the GitHub API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// Author's GitHub username
    pub author: String,

    /// Base branch name (e.g., "main")
    pub base_branch: String,

    /// HEAD branch name (e.g., "feat/foo")
    pub head_branch: String,

    /// Whether the PR can be merged into its base without conflicts
    pub mergeable: MergeableState,

    /// Whether the PR is a draft
    pub draft: bool,

    /// PR URL for opening in browser
    pub html_url: String,
}

/// Mergeability of a pull request as computed by GitHub
///
/// GitHub computes this lazily in the background, so a freshly fetched PR
/// may still report `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeableState {
    /// The head branch merges cleanly into the base
    Mergeable,
    /// The merge has conflicts
    Conflicting,
    /// Not yet computed by GitHub
    #[default]
    Unknown,
}

impl MergeableState {
    /// Map GitHub's nullable `mergeable` flag
    pub fn from_flag(mergeable: Option<bool>) -> Self {
        match mergeable {
            Some(true) => MergeableState::Mergeable,
            Some(false) => MergeableState::Conflicting,
            None => MergeableState::Unknown,
        }
    }
}

/// Parameters for opening a new pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    pub title: String,
    pub body: String,
    /// Branch containing the changes
    pub head: String,
    /// Branch the changes should be merged into
    pub base: String,
    pub draft: bool,
}

/// Result of merging one branch into another
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// A merge commit was created on the target branch
    Merged {
        /// Commit SHA of the merge commit
        sha: Option<String>,
    },
    /// The target branch already contained every commit of the source
    AlreadyUpToDate,
}
