//! Pull request chores for a single GitHub repository
//!
//! - `create`: open a PR with a title derived from the branch name and the
//!   standard description template
//! - `refresh`: merge the base branch into every open PR of the current user
//!   that GitHub reports as mergeable, optionally after confirmation

pub mod branch;
pub mod classifier;
pub mod cli;
pub mod create;
pub mod error;
pub mod logger;
pub mod prompt;
pub mod reconciler;
pub mod report;
pub mod template;

#[cfg(test)]
mod test_support;

pub use branch::generate_title;
pub use classifier::{classify, ClassificationResult, Disposition};
pub use create::{create_pull_request, run_create, CreateRequest};
pub use error::ChoresError;
pub use reconciler::{
    RefreshOptions, RefreshOutcome, RefreshPhase, RefreshPlan, RefreshReconciler, RefreshStatus,
};
pub use report::StatusReporter;
pub use template::{render_description, DescriptionParams};
