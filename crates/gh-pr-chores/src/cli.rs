//! CLI argument parsing for gh-pr-chores

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gh-pr-chores")]
#[command(author, version, about = "Quick GitHub PR creator and refresher", long_about = None)]
pub struct Cli {
    /// Repository as owner/name (overrides GITHUB_REPO)
    #[arg(short, long, global = true)]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a PR with the standard title and description
    Create {
        /// Branch name (must start with feat/, fix/, chore/ or perf/ unless --title is given)
        #[arg(required = true)]
        branch: String,

        /// PR title (optional, will be generated from branch name)
        #[arg(short, long)]
        title: Option<String>,

        /// Ticket number (e.g., 123)
        #[arg(long)]
        ticket: Option<String>,

        /// Testing steps (optional)
        #[arg(long = "test")]
        testing_steps: Option<String>,

        /// Base branch (default: configured base branch, usually main)
        #[arg(long)]
        base: Option<String>,

        /// Create as draft PR
        #[arg(short, long)]
        draft: bool,
    },

    /// Merge the base branch into all of your open PRs that have no conflicts
    Refresh {
        /// Show what would be updated and ask before merging anything
        #[arg(long)]
        dry_run: bool,

        /// Branch to merge into the PRs (default: configured base branch)
        #[arg(long)]
        base: Option<String>,
    },
}
