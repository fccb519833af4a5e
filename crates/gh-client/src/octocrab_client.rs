//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! Every call goes straight to the API, nothing is cached.

use crate::client::{GitHubClient, Result};
use crate::error::RemoteError;
use crate::types::{MergeOutcome, MergeableState, NewPullRequest, PullRequest};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PER_PAGE: u8 = 100;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client authenticated with a personal access token
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token.into())
            .build()
            .map_err(|e| RemoteError::from_octocrab("build GitHub client", e))?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

/// Request body of `POST /repos/{owner}/{repo}/merges`
#[derive(Debug, Serialize)]
struct MergeBranchRequest<'a> {
    base: &'a str,
    head: &'a str,
    commit_message: &'a str,
}

#[derive(Debug, Deserialize)]
struct MergeCommit {
    sha: String,
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn current_user(&self) -> Result<String> {
        debug!("Resolving authenticated user");
        let user = self
            .octocrab
            .current()
            .user()
            .await
            .map_err(|e| RemoteError::from_octocrab("resolve current user", e))?;
        debug!("Authenticated as {}", user.login);
        Ok(user.login)
    }

    async fn list_open_pull_requests_by_author(
        &self,
        owner: &str,
        repo: &str,
        login: &str,
    ) -> Result<Vec<PullRequest>> {
        debug!("Fetching open PRs by {} for {}/{}", login, owner, repo);

        let mut prs = Vec::new();
        let mut page_num = 1u32;

        loop {
            let page = self
                .octocrab
                .pulls(owner, repo)
                .list()
                .state(octocrab::params::State::Open)
                .per_page(PER_PAGE)
                .page(page_num)
                .send()
                .await
                .map_err(|e| RemoteError::from_octocrab("list pull requests", e))?;

            let has_next = page.next.is_some();
            prs.extend(
                page.items
                    .iter()
                    .map(convert_pull_request)
                    .filter(|pr| is_authored_by(pr, login)),
            );

            if !has_next {
                break;
            }
            page_num += 1;
        }

        debug!("Fetched {} PRs by {} for {}/{}", prs.len(), login, owner, repo);
        Ok(prs)
    }

    async fn refresh_mergeable_state(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> Result<PullRequest> {
        debug!("Checking mergeable state of {}/{}#{}", owner, repo, pr_number);
        let pr = self
            .octocrab
            .pulls(owner, repo)
            .get(pr_number)
            .await
            .map_err(|e| RemoteError::from_octocrab(format!("check PR #{}", pr_number), e))?;
        Ok(convert_pull_request(&pr))
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr: &NewPullRequest,
    ) -> Result<PullRequest> {
        debug!(
            "Creating PR {} -> {} in {}/{} (draft: {})",
            pr.head, pr.base, owner, repo, pr.draft
        );
        let created = self
            .octocrab
            .pulls(owner, repo)
            .create(pr.title.clone(), pr.head.clone(), pr.base.clone())
            .body(pr.body.clone())
            .draft(pr.draft)
            .send()
            .await
            .map_err(|e| RemoteError::from_octocrab("create pull request", e))?;
        Ok(convert_pull_request(&created))
    }

    async fn merge_branch_into(
        &self,
        owner: &str,
        repo: &str,
        head_branch: &str,
        from_branch: &str,
        message: &str,
    ) -> Result<MergeOutcome> {
        debug!(
            "Merging {} into {} in {}/{}",
            from_branch, head_branch, owner, repo
        );
        let context = format!("merge {} into {}", from_branch, head_branch);

        // The merges endpoint answers 204 with an empty body when there is
        // nothing to merge, which the typed helpers cannot deserialize.
        let route = format!("/repos/{}/{}/merges", owner, repo);
        let request = MergeBranchRequest {
            base: head_branch,
            head: from_branch,
            commit_message: message,
        };
        let response = self
            .octocrab
            ._post(route, Some(&request))
            .await
            .map_err(|e| RemoteError::from_octocrab(context.clone(), e))?;
        let response = octocrab::map_github_error(response)
            .await
            .map_err(|e| RemoteError::from_octocrab(context.clone(), e))?;

        if response.status().as_u16() == 204 {
            debug!("{} is already up to date with {}", head_branch, from_branch);
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        let body = self
            .octocrab
            .body_to_string(response)
            .await
            .map_err(|e| RemoteError::from_octocrab(context, e))?;
        let sha = serde_json::from_str::<MergeCommit>(&body)
            .ok()
            .map(|commit| commit.sha);
        Ok(MergeOutcome::Merged { sha })
    }
}

/// GitHub logins are case-insensitive
fn is_authored_by(pr: &PullRequest, login: &str) -> bool {
    pr.author.eq_ignore_ascii_case(login)
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        base_branch: pr.base.ref_field.clone(),
        head_branch: pr.head.ref_field.clone(),
        mergeable: MergeableState::from_flag(pr.mergeable),
        draft: pr.draft.unwrap_or(false),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn author_json(login: &str) -> Value {
        let api = format!("https://api.github.com/users/{}", login);
        json!({
            "login": login,
            "id": 583231,
            "node_id": "MDQ6VXNlcjU4MzIzMQ==",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "gravatar_id": "",
            "url": api,
            "html_url": format!("https://github.com/{}", login),
            "followers_url": format!("{}/followers", api),
            "following_url": format!("{}/following{{/other_user}}", api),
            "gists_url": format!("{}/gists{{/gist_id}}", api),
            "starred_url": format!("{}/starred{{/owner}}{{/repo}}", api),
            "subscriptions_url": format!("{}/subscriptions", api),
            "organizations_url": format!("{}/orgs", api),
            "repos_url": format!("{}/repos", api),
            "events_url": format!("{}/events{{/privacy}}", api),
            "received_events_url": format!("{}/received_events", api),
            "type": "User",
            "site_admin": false
        })
    }

    fn api_pull_request(login: &str, mergeable: Value) -> octocrab::models::pulls::PullRequest {
        let pr = json!({
            "url": "https://api.github.com/repos/acme/web/pulls/42",
            "id": 1296269,
            "number": 42,
            "html_url": "https://github.com/acme/web/pull/42",
            "title": "feat: new login page",
            "user": author_json(login),
            "locked": false,
            "maintainer_can_modify": true,
            "draft": true,
            "mergeable": mergeable,
            "head": {
                "label": "acme:feat/new-login-page",
                "ref": "feat/new-login-page",
                "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e"
            },
            "base": {
                "label": "acme:main",
                "ref": "main",
                "sha": "e5bd3914e2e596debea16f433f57875b5b90bcd6"
            }
        });
        serde_json::from_value(pr).unwrap()
    }

    #[test]
    fn test_convert_pull_request() {
        let pr = convert_pull_request(&api_pull_request("octocat", json!(true)));

        assert_eq!(pr.number, 42);
        assert_eq!(pr.title, "feat: new login page");
        assert_eq!(pr.author, "octocat");
        assert_eq!(pr.head_branch, "feat/new-login-page");
        assert_eq!(pr.base_branch, "main");
        assert_eq!(pr.mergeable, MergeableState::Mergeable);
        assert!(pr.draft);
        assert_eq!(pr.html_url, "https://github.com/acme/web/pull/42");
    }

    #[test]
    fn test_convert_pull_request_mergeable_not_computed() {
        let pr = convert_pull_request(&api_pull_request("octocat", Value::Null));
        assert_eq!(pr.mergeable, MergeableState::Unknown);

        let pr = convert_pull_request(&api_pull_request("octocat", json!(false)));
        assert_eq!(pr.mergeable, MergeableState::Conflicting);
    }

    #[test]
    fn test_author_filter() {
        let mine = convert_pull_request(&api_pull_request("octocat", json!(true)));
        let theirs = convert_pull_request(&api_pull_request("hubot", json!(true)));

        assert!(is_authored_by(&mine, "octocat"));
        assert!(is_authored_by(&mine, "OctoCat"));
        assert!(!is_authored_by(&theirs, "octocat"));
        assert!(!is_authored_by(&mine, "octo"));
    }

    #[test]
    fn test_merge_request_body() {
        let request = MergeBranchRequest {
            base: "feat/login",
            head: "main",
            commit_message: "Merge 'main' into feat/login",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["base"], "feat/login");
        assert_eq!(json["head"], "main");
        assert_eq!(json["commit_message"], "Merge 'main' into feat/login");
    }

    #[test]
    fn test_merge_commit_sha_parsing() {
        let body = r#"{"sha":"7fd1a60b01f91b314f59955a4e4d4e80d8edf11d","commit":{}}"#;
        let commit: MergeCommit = serde_json::from_str(body).unwrap();
        assert_eq!(commit.sha, "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d");
    }
}
