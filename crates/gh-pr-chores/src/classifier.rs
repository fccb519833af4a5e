//! Mergeable vs conflicting classification of open PRs
//!
//! Fail-safe: a PR is only ever `Updateable` when GitHub positively reports
//! it as mergeable. Unknown state and errors both count as conflicting.
//!
//! GitHub computes `mergeable` against the PR's own base, so a PR targeting
//! another branch than the one being merged in is left alone too.

use crate::report::StatusReporter;
use gh_client::{GitHubClient, MergeableState, PullRequest};
use gh_pr_config::RepositoryId;
use log::{debug, warn};
use std::io::Write;

/// What the refresh will do with a PR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Base can be merged into the PR branch
    Updateable,
    /// Conflicting, not yet known, or could not be checked: leave alone
    Conflicting,
}

impl Disposition {
    pub fn from_state(state: MergeableState) -> Self {
        match state {
            MergeableState::Mergeable => Disposition::Updateable,
            MergeableState::Conflicting | MergeableState::Unknown => Disposition::Conflicting,
        }
    }

    /// Disposition of `pr` when `base_branch` is to be merged into it
    pub fn for_pull_request(pr: &PullRequest, base_branch: &str) -> Self {
        if pr.base_branch != base_branch {
            return Disposition::Conflicting;
        }
        Self::from_state(pr.mergeable)
    }
}

/// A PR paired with its disposition for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub pr: PullRequest,
    pub disposition: Disposition,
}

impl ClassificationResult {
    pub fn is_updateable(&self) -> bool {
        self.disposition == Disposition::Updateable
    }
}

/// Classify each PR by its freshly computed mergeable state against `base_branch`
///
/// One `refresh_mergeable_state` call per PR, in input order. Never mutates
/// remote state. A failed check is reported and the PR treated as
/// conflicting.
pub async fn classify<C, W>(
    client: &C,
    repo: &RepositoryId,
    base_branch: &str,
    prs: Vec<PullRequest>,
    reporter: &mut StatusReporter<W>,
) -> Vec<ClassificationResult>
where
    C: GitHubClient + ?Sized,
    W: Write,
{
    let mut results = Vec::with_capacity(prs.len());

    for pr in prs {
        let number = pr.number;
        let pr = match client
            .refresh_mergeable_state(&repo.owner, &repo.name, number)
            .await
        {
            Ok(refreshed) => refreshed,
            Err(e) => {
                warn!("Mergeable check failed for PR #{}: {}", number, e);
                reporter.error(format!(
                    "Could not check PR #{}, treating it as conflicting: {}",
                    number, e.message
                ));
                results.push(ClassificationResult {
                    pr,
                    disposition: Disposition::Conflicting,
                });
                continue;
            }
        };

        let disposition = Disposition::for_pull_request(&pr, base_branch);
        debug!(
            "PR #{} targets {} and is {:?}, classified as {:?}",
            number, pr.base_branch, pr.mergeable, disposition
        );
        results.push(ClassificationResult { pr, disposition });
    }

    results
}
