//! PR description template
//!
//! One canonical Markdown body: the `Fixes` line, three pre-checked review
//! attestations and a testing section.

/// Substituted for any value the caller did not provide
pub const PLACEHOLDER: &str = "[FILL IN]";

/// Values substituted into the PR description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionParams {
    /// Issue tracker key, e.g. `CAL`
    pub issue_prefix: String,
    /// Ticket number within the tracker
    pub ticket: Option<String>,
    /// What a reviewer should do to test the change
    pub testing_steps: Option<String>,
}

impl DescriptionParams {
    pub fn new(issue_prefix: impl Into<String>) -> Self {
        Self {
            issue_prefix: issue_prefix.into(),
            ticket: None,
            testing_steps: None,
        }
    }

    pub fn ticket(mut self, ticket: Option<String>) -> Self {
        self.ticket = ticket;
        self
    }

    pub fn testing_steps(mut self, steps: Option<String>) -> Self {
        self.testing_steps = steps;
        self
    }
}

/// Render the PR body
pub fn render_description(params: &DescriptionParams) -> String {
    let ticket = params.ticket.as_deref().unwrap_or(PLACEHOLDER);
    let testing_steps = params.testing_steps.as_deref().unwrap_or(PLACEHOLDER);

    format!(
        "## What does this PR do?

- Fixes {prefix}-{ticket}

## Mandatory Tasks (DO NOT REMOVE)

- [x] I have self-reviewed the code (A decent size PR without self-review might be rejected).
- [x] N/A - I have updated the developer docs in /docs if this PR makes changes that would require a [documentation change](https://cal.com/docs). If N/A, write N/A here and check the checkbox.
- [x] I confirm automated tests are in place that prove my fix is effective or that my feature works.

## How should this be tested?

- Go to {testing_steps}.",
        prefix = params.issue_prefix,
    )
}
