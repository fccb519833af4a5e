use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io::Stdout;
use std::process::ExitCode;

use gh_client::{GitHubClient, OctocrabClient};
use gh_pr_chores::cli::{Cli, Command};
use gh_pr_chores::prompt::LinePrompt;
use gh_pr_chores::{
    logger, run_create, CreateRequest, RefreshOptions, RefreshReconciler, StatusReporter,
};
use gh_pr_config::{AppConfig, RepositoryId};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();
    let mut reporter = StatusReporter::stdout();

    match run(cli, &mut reporter).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            reporter.error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Errors returned from here are fatal startup failures
async fn run(cli: Cli, reporter: &mut StatusReporter<Stdout>) -> Result<ExitCode> {
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(repo) = &cli.repo {
        config.repository = RepositoryId::parse(repo)?;
    }
    info!("Using {:?}", config);

    let client = OctocrabClient::from_token(config.token.clone())
        .context("Failed to initialize GitHub client")?;

    match cli.command {
        Command::Create {
            branch,
            title,
            ticket,
            testing_steps,
            base,
            draft,
        } => {
            let request = CreateRequest {
                branch,
                title,
                ticket,
                testing_steps,
                base: base.unwrap_or_else(|| config.base_branch.clone()),
                draft,
            };
            match run_create(&client, &config, &request, reporter).await {
                Ok(_) => Ok(ExitCode::SUCCESS),
                Err(_) => Ok(ExitCode::FAILURE),
            }
        }
        Command::Refresh { dry_run, base } => {
            let login = client
                .current_user()
                .await
                .context("Failed to resolve the authenticated GitHub user")?;

            let options = RefreshOptions {
                base_branch: base.unwrap_or_else(|| config.base_branch.clone()),
                preview: dry_run,
            };
            let mut prompt = LinePrompt::stdin();
            let outcome = RefreshReconciler::new(&client, &config.repository, &login, options)
                .run(&mut prompt, reporter)
                .await
                .with_context(|| format!("Failed to list open PRs in {}", config.repository))?;

            info!(
                "Refresh finished: {:?}, {} updated, {} failed",
                outcome.status,
                outcome.updated_count(),
                outcome.failed_count()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
