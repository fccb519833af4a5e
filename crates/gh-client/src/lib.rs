//! GitHub API client for pull request chores
//!
//! This crate provides a trait-based GitHub API client covering exactly the
//! calls the chores need: resolve the token owner, list their open PRs,
//! re-check mergeability, open a PR and merge one branch into another.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - list_open_pull_requests_by_author()           │
//! │  - refresh_mergeable_state()                     │
//! │  - create_pull_request()                         │
//! │  - merge_branch_into()                           │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ OctocrabClient  │         │ test doubles        │
//! │ (direct API)    │         │ (record calls)      │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//!
//! # async fn example() -> gh_client::Result<()> {
//! let client = OctocrabClient::from_token("token")?;
//! let login = client.current_user().await?;
//! let prs = client
//!     .list_open_pull_requests_by_author("owner", "repo", &login)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

pub use client::{GitHubClient, Result};
pub use error::RemoteError;
pub use octocrab_client::OctocrabClient;
pub use types::{MergeOutcome, MergeableState, NewPullRequest, PullRequest};
