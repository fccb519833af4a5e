//! Test doubles shared by the unit tests

use async_trait::async_trait;
use gh_client::{
    GitHubClient, MergeOutcome, MergeableState, NewPullRequest, PullRequest, RemoteError, Result,
};
use gh_pr_config::RepositoryId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const TEST_LOGIN: &str = "octocat";

pub fn test_repo() -> RepositoryId {
    RepositoryId::new("acme", "web")
}

pub fn test_pr(number: u64, mergeable: MergeableState) -> PullRequest {
    PullRequest {
        number,
        title: format!("feat: change {}", number),
        author: TEST_LOGIN.to_string(),
        base_branch: "main".to_string(),
        head_branch: format!("feat/change-{}", number),
        mergeable,
        draft: false,
        html_url: format!("https://github.com/acme/web/pull/{}", number),
    }
}

#[derive(Debug, Default)]
struct MockState {
    list_calls: usize,
    refresh_calls: Vec<u64>,
    merge_calls: Vec<(String, String, String)>,
    create_calls: Vec<NewPullRequest>,
    merged_heads: HashSet<String>,
}

/// In-memory `GitHubClient` recording every call
///
/// Merging into the same head twice reports `AlreadyUpToDate` the second
/// time, like GitHub does when there is nothing new on the base.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    prs: Vec<PullRequest>,
    refreshed: HashMap<u64, MergeableState>,
    failing_refresh: HashMap<u64, String>,
    failing_merge: HashMap<String, String>,
    failing_list: Option<String>,
    failing_create: Option<String>,
    state: Arc<Mutex<MockState>>,
}

impl MockClient {
    pub fn new(prs: Vec<PullRequest>) -> Self {
        Self {
            prs,
            ..Self::default()
        }
    }

    /// Report `state` when PR `number` is re-checked
    pub fn with_refreshed_state(mut self, number: u64, state: MergeableState) -> Self {
        self.refreshed.insert(number, state);
        self
    }

    pub fn failing_refresh(mut self, number: u64, message: &str) -> Self {
        self.failing_refresh.insert(number, message.to_string());
        self
    }

    pub fn failing_merge(mut self, head_branch: &str, message: &str) -> Self {
        self.failing_merge
            .insert(head_branch.to_string(), message.to_string());
        self
    }

    pub fn failing_list(mut self, message: &str) -> Self {
        self.failing_list = Some(message.to_string());
        self
    }

    pub fn failing_create(mut self, message: &str) -> Self {
        self.failing_create = Some(message.to_string());
        self
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn refresh_calls(&self) -> Vec<u64> {
        self.state.lock().unwrap().refresh_calls.clone()
    }

    pub fn merge_calls(&self) -> Vec<(String, String, String)> {
        self.state.lock().unwrap().merge_calls.clone()
    }

    pub fn create_calls(&self) -> Vec<NewPullRequest> {
        self.state.lock().unwrap().create_calls.clone()
    }
}

#[async_trait]
impl GitHubClient for MockClient {
    async fn current_user(&self) -> Result<String> {
        Ok(TEST_LOGIN.to_string())
    }

    async fn list_open_pull_requests_by_author(
        &self,
        _owner: &str,
        _repo: &str,
        login: &str,
    ) -> Result<Vec<PullRequest>> {
        self.state.lock().unwrap().list_calls += 1;
        if let Some(message) = &self.failing_list {
            return Err(RemoteError::new("list pull requests", message.clone()));
        }
        Ok(self
            .prs
            .iter()
            .filter(|pr| pr.author == login)
            .cloned()
            .collect())
    }

    async fn refresh_mergeable_state(
        &self,
        _owner: &str,
        _repo: &str,
        pr_number: u64,
    ) -> Result<PullRequest> {
        self.state.lock().unwrap().refresh_calls.push(pr_number);
        if let Some(message) = self.failing_refresh.get(&pr_number) {
            return Err(RemoteError::new(
                format!("check PR #{}", pr_number),
                message.clone(),
            ));
        }
        let mut pr = self
            .prs
            .iter()
            .find(|pr| pr.number == pr_number)
            .cloned()
            .ok_or_else(|| RemoteError::new(format!("check PR #{}", pr_number), "Not Found"))?;
        if let Some(state) = self.refreshed.get(&pr_number) {
            pr.mergeable = *state;
        }
        Ok(pr)
    }

    async fn create_pull_request(
        &self,
        _owner: &str,
        _repo: &str,
        pr: &NewPullRequest,
    ) -> Result<PullRequest> {
        self.state.lock().unwrap().create_calls.push(pr.clone());
        if let Some(message) = &self.failing_create {
            return Err(RemoteError::new("create pull request", message.clone()));
        }
        Ok(PullRequest {
            number: 101,
            title: pr.title.clone(),
            author: TEST_LOGIN.to_string(),
            base_branch: pr.base.clone(),
            head_branch: pr.head.clone(),
            mergeable: MergeableState::Unknown,
            draft: pr.draft,
            html_url: "https://github.com/acme/web/pull/101".to_string(),
        })
    }

    async fn merge_branch_into(
        &self,
        _owner: &str,
        _repo: &str,
        head_branch: &str,
        from_branch: &str,
        message: &str,
    ) -> Result<MergeOutcome> {
        let mut state = self.state.lock().unwrap();
        state.merge_calls.push((
            head_branch.to_string(),
            from_branch.to_string(),
            message.to_string(),
        ));
        if let Some(error) = self.failing_merge.get(head_branch) {
            return Err(RemoteError::new(
                format!("merge {} into {}", from_branch, head_branch),
                error.clone(),
            ));
        }
        if state.merged_heads.insert(head_branch.to_string()) {
            Ok(MergeOutcome::Merged {
                sha: Some(format!("sha-{}", head_branch)),
            })
        } else {
            Ok(MergeOutcome::AlreadyUpToDate)
        }
    }
}
