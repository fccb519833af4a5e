//! Opening a standardized pull request

use crate::branch::generate_title;
use crate::error::ChoresError;
use crate::report::StatusReporter;
use crate::template::{render_description, DescriptionParams};
use gh_client::{GitHubClient, NewPullRequest, PullRequest};
use gh_pr_config::AppConfig;
use log::{info, warn};
use std::io::Write;

/// What the user asked `create` for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    /// Head branch of the new PR
    pub branch: String,
    /// Explicit title; generated from `branch` when absent
    pub title: Option<String>,
    pub ticket: Option<String>,
    pub testing_steps: Option<String>,
    /// Branch to merge into
    pub base: String,
    pub draft: bool,
}

/// Build the PR from the request and open it on GitHub
///
/// An invalid branch name fails before anything is sent.
pub async fn create_pull_request<C>(
    client: &C,
    config: &AppConfig,
    request: &CreateRequest,
) -> Result<PullRequest, ChoresError>
where
    C: GitHubClient + ?Sized,
{
    let title = match non_empty(&request.title) {
        Some(title) => title,
        None => generate_title(&request.branch)?,
    };

    let body = render_description(
        &DescriptionParams::new(config.issue_prefix.clone())
            .ticket(non_empty(&request.ticket))
            .testing_steps(non_empty(&request.testing_steps)),
    );

    let new_pr = NewPullRequest {
        title,
        body,
        head: request.branch.clone(),
        base: request.base.clone(),
        draft: request.draft,
    };

    let repo = &config.repository;
    let pr = client
        .create_pull_request(&repo.owner, &repo.name, &new_pr)
        .await?;
    info!("Created PR #{} in {}", pr.number, repo);
    Ok(pr)
}

/// Blank flag values count as not given
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `create` command boundary: report the result to the user
///
/// Single attempt, no retry.
pub async fn run_create<C, W>(
    client: &C,
    config: &AppConfig,
    request: &CreateRequest,
    reporter: &mut StatusReporter<W>,
) -> Result<PullRequest, ChoresError>
where
    C: GitHubClient + ?Sized,
    W: Write,
{
    match create_pull_request(client, config, request).await {
        Ok(pr) => {
            reporter.blank();
            reporter.success("PR created successfully!");
            reporter.plain(format!("URL: {}", pr.html_url));
            Ok(pr)
        }
        Err(e) => {
            warn!("Failed to create PR for {}: {}", request.branch, e);
            match &e {
                ChoresError::InvalidBranchName { .. } => reporter.error(format!("Error: {}", e)),
                ChoresError::Remote(remote) => {
                    reporter.error(format!("Error creating PR: {}", remote.message))
                }
            }
            Err(e)
        }
    }
}
