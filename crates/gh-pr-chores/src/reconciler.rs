//! Refresh: bring the user's open PRs up to date with a base branch
//!
//! ```text
//! Idle → Analyzing → Reporting → (AwaitingConfirmation | Applying) → Done
//! ```
//!
//! Classification and merging are two separate sequential passes over the
//! same PR order. State may change on GitHub in between; the merge call
//! itself is the authoritative outcome and is reported as such.

use crate::classifier::{classify, ClassificationResult, Disposition};
use crate::error::ChoresError;
use crate::prompt::Confirm;
use crate::report::StatusReporter;
use gh_client::{GitHubClient, MergeOutcome, MergeableState, RemoteError};
use gh_pr_config::RepositoryId;
use log::{debug, info, warn};
use std::io::Write;

/// How a refresh run behaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOptions {
    /// Branch merged into every updateable PR
    pub base_branch: String,
    /// Show the plan and ask before merging anything
    pub preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    Analyzing,
    Reporting,
    AwaitingConfirmation,
    Applying,
    Done,
}

/// Classified PRs of one run, in listing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshPlan {
    pub results: Vec<ClassificationResult>,
}

impl RefreshPlan {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn updateable(&self) -> usize {
        self.results.iter().filter(|r| r.is_updateable()).count()
    }

    pub fn conflicting(&self) -> usize {
        self.total() - self.updateable()
    }

    pub fn conflicting_urls(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| !r.is_updateable())
            .map(|r| r.pr.html_url.clone())
            .collect()
    }
}

/// What happened to a single updateable PR
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    Merged,
    AlreadyUpToDate,
    Failed(RemoteError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    pub number: u64,
    pub head_branch: String,
    pub result: UpdateResult,
}

/// How the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    /// The user has no open PRs
    NothingToDo,
    /// No PR could be updated
    NothingToUpdate,
    /// Declined at the confirmation prompt, nothing was merged
    Cancelled,
    /// Merges were attempted
    Applied,
}

/// Result of a refresh run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub status: RefreshStatus,
    pub plan: RefreshPlan,
    pub records: Vec<UpdateRecord>,
}

impl RefreshOutcome {
    fn without_updates(status: RefreshStatus, plan: RefreshPlan) -> Self {
        Self {
            status,
            plan,
            records: Vec::new(),
        }
    }

    /// PRs that received a merge commit
    pub fn updated_numbers(&self) -> Vec<u64> {
        self.records
            .iter()
            .filter(|r| r.result == UpdateResult::Merged)
            .map(|r| r.number)
            .collect()
    }

    pub fn updated_count(&self) -> usize {
        self.updated_numbers().len()
    }

    pub fn up_to_date_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.result == UpdateResult::AlreadyUpToDate)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.result, UpdateResult::Failed(_)))
            .count()
    }
}

/// Runs the classify-then-merge workflow for one user in one repository
pub struct RefreshReconciler<'a, C: ?Sized> {
    client: &'a C,
    repo: &'a RepositoryId,
    login: &'a str,
    options: RefreshOptions,
    phase: RefreshPhase,
}

impl<'a, C> RefreshReconciler<'a, C>
where
    C: GitHubClient + ?Sized,
{
    pub fn new(
        client: &'a C,
        repo: &'a RepositoryId,
        login: &'a str,
        options: RefreshOptions,
    ) -> Self {
        Self {
            client,
            repo,
            login,
            options,
            phase: RefreshPhase::Idle,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    /// Run the workflow to completion
    ///
    /// Only a failure to list the PRs aborts the run. Everything after that
    /// is isolated per PR and ends up in the returned outcome.
    pub async fn run<P, W>(
        &mut self,
        prompt: &mut P,
        reporter: &mut StatusReporter<W>,
    ) -> Result<RefreshOutcome, ChoresError>
    where
        P: Confirm + ?Sized,
        W: Write,
    {
        self.enter(RefreshPhase::Analyzing);
        reporter.info(format!(
            "Fetching open PRs by {} in {}...",
            self.login, self.repo
        ));
        let prs = self
            .client
            .list_open_pull_requests_by_author(&self.repo.owner, &self.repo.name, self.login)
            .await?;

        if prs.is_empty() {
            reporter.info("No open PRs found, nothing to do.");
            self.enter(RefreshPhase::Done);
            return Ok(RefreshOutcome::without_updates(
                RefreshStatus::NothingToDo,
                RefreshPlan::default(),
            ));
        }

        let plan = RefreshPlan {
            results: classify(
                self.client,
                self.repo,
                &self.options.base_branch,
                prs,
                reporter,
            )
            .await,
        };

        self.enter(RefreshPhase::Reporting);
        self.report_plan(&plan, reporter);

        if plan.updateable() == 0 {
            reporter.info("Nothing to update.");
            return Ok(self.finish(
                RefreshOutcome::without_updates(RefreshStatus::NothingToUpdate, plan),
                reporter,
            ));
        }

        if self.options.preview {
            self.enter(RefreshPhase::AwaitingConfirmation);
            let question = format!(
                "Merge '{}' into {} PR(s)?",
                self.options.base_branch,
                plan.updateable()
            );
            let confirmed = prompt.confirm(&question).unwrap_or_else(|e| {
                warn!("Failed to read confirmation, treating as no: {}", e);
                false
            });
            if !confirmed {
                reporter.warning("Cancelled, no PRs were changed.");
                return Ok(self.finish(
                    RefreshOutcome::without_updates(RefreshStatus::Cancelled, plan),
                    reporter,
                ));
            }
        }

        self.enter(RefreshPhase::Applying);
        let records = self.apply(&plan, reporter).await;

        Ok(self.finish(
            RefreshOutcome {
                status: RefreshStatus::Applied,
                plan,
                records,
            },
            reporter,
        ))
    }

    fn enter(&mut self, phase: RefreshPhase) {
        debug!("Refresh: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn report_plan<W: Write>(&self, plan: &RefreshPlan, reporter: &mut StatusReporter<W>) {
        for result in &plan.results {
            let pr = &result.pr;
            let draft = if pr.draft { " (draft)" } else { "" };
            match (result.disposition, pr.mergeable) {
                (Disposition::Updateable, _) => reporter.success(format!(
                    "#{} {}{} can be updated",
                    pr.number, pr.title, draft
                )),
                (Disposition::Conflicting, _) if pr.base_branch != self.options.base_branch => {
                    reporter.warning(format!(
                        "#{} {}{} targets {}, not {}, skipping",
                        pr.number, pr.title, draft, pr.base_branch, self.options.base_branch
                    ))
                }
                (Disposition::Conflicting, MergeableState::Unknown) => reporter.warning(format!(
                    "#{} {}{} mergeable state not known yet, skipping",
                    pr.number, pr.title, draft
                )),
                (Disposition::Conflicting, _) => reporter.warning(format!(
                    "#{} {}{} has conflicts with its base",
                    pr.number, pr.title, draft
                )),
            }
        }

        reporter.info(format!(
            "{} open PR(s): {} updateable, {} conflicting",
            plan.total(),
            plan.updateable(),
            plan.conflicting()
        ));
    }

    async fn apply<W: Write>(
        &self,
        plan: &RefreshPlan,
        reporter: &mut StatusReporter<W>,
    ) -> Vec<UpdateRecord> {
        let base = &self.options.base_branch;
        let mut records = Vec::new();

        for classified in plan.results.iter().filter(|r| r.is_updateable()) {
            let pr = &classified.pr;
            let message = merge_message(base, &pr.head_branch);

            let outcome = self
                .client
                .merge_branch_into(
                    &self.repo.owner,
                    &self.repo.name,
                    &pr.head_branch,
                    base,
                    &message,
                )
                .await;

            let result = match outcome {
                Ok(MergeOutcome::Merged { sha }) => {
                    info!("Merged {} into PR #{} ({:?})", base, pr.number, sha);
                    reporter.success(format!("Updated PR #{} ({})", pr.number, pr.head_branch));
                    UpdateResult::Merged
                }
                Ok(MergeOutcome::AlreadyUpToDate) => {
                    reporter.info(format!(
                        "PR #{} is already up to date with {}",
                        pr.number, base
                    ));
                    UpdateResult::AlreadyUpToDate
                }
                Err(e) => {
                    warn!("Failed to update PR #{}: {}", pr.number, e);
                    reporter.error(format!("Failed to update PR #{}: {}", pr.number, e.message));
                    UpdateResult::Failed(e)
                }
            };

            records.push(UpdateRecord {
                number: pr.number,
                head_branch: pr.head_branch.clone(),
                result,
            });
        }

        records
    }

    fn finish<W: Write>(
        &mut self,
        outcome: RefreshOutcome,
        reporter: &mut StatusReporter<W>,
    ) -> RefreshOutcome {
        self.enter(RefreshPhase::Done);

        if outcome.status == RefreshStatus::Applied {
            let updated = outcome.updated_numbers();
            if updated.is_empty() {
                reporter.info("No PRs were updated.");
            } else {
                let numbers: Vec<String> = updated.iter().map(|n| format!("#{}", n)).collect();
                reporter.success(format!(
                    "Updated {} PR(s): {}",
                    updated.len(),
                    numbers.join(", ")
                ));
            }
            if outcome.up_to_date_count() > 0 {
                reporter.info(format!(
                    "{} PR(s) already up to date",
                    outcome.up_to_date_count()
                ));
            }
            if outcome.failed_count() > 0 {
                reporter.error(format!(
                    "Failed to update {} PR(s), re-run to retry",
                    outcome.failed_count()
                ));
            }
        }

        let urls = outcome.plan.conflicting_urls();
        if !urls.is_empty() {
            reporter.blank();
            reporter.warning("PRs that need manual attention:");
            for url in urls {
                reporter.plain(url);
            }
        }

        outcome
    }
}

/// Commit message of the merge commit created on a PR branch
pub fn merge_message(base: &str, head: &str) -> String {
    format!("Merge '{}' into {}", base, head)
}
