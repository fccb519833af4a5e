//! Error type for failed GitHub API calls

use serde_json::Value;
use thiserror::Error;

/// A failure reported by GitHub (or the network in between)
///
/// `context` names the operation or PR that failed, `message` is the
/// provider's own description of the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {message}")]
pub struct RemoteError {
    pub context: String,
    pub message: String,
}

impl RemoteError {
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Wrap an octocrab error, keeping GitHub's message when there is one
    pub fn from_octocrab(context: impl Into<String>, err: octocrab::Error) -> Self {
        let message = match &err {
            octocrab::Error::GitHub { source, .. } => {
                github_message(&source.message, source.errors.as_deref())
            }
            other => other.to_string(),
        };
        Self::new(context, message)
    }
}

/// GitHub's top-level message followed by the details from `errors[]`
///
/// A 422 only says "Validation Failed" at the top level, the actual cause
/// ("A pull request already exists for ...") is in the error list.
fn github_message(message: &str, errors: Option<&[Value]>) -> String {
    let details: Vec<String> = errors
        .unwrap_or_default()
        .iter()
        .map(|error| match error.get("message").and_then(Value::as_str) {
            Some(detail) => detail.to_string(),
            None => match error {
                Value::String(detail) => detail.clone(),
                other => other.to_string(),
            },
        })
        .collect();

    if details.is_empty() {
        message.to_string()
    } else {
        format!("{} ({})", message, details.join("; "))
    }
}
