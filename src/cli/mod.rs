pub mod credential;
pub mod provision;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;

use crate::core::config::ProvisionConfig;
use crate::core::git::SystemCommandRunner;
use crate::providers::github::GitHubProvider;

pub use provision::{Provisioner, RunStatus};

#[derive(Parser)]
#[command(name = "gh-provision")]
#[command(about = "Create a GitHub repository and push the local branch to it")]
#[command(version)]
pub struct Cli {
    /// GitHub personal access token (prompted for when omitted)
    pub token: Option<String>,

    /// TOML file overriding the repository to create
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<RunStatus> {
        let config = ProvisionConfig::load(self.config.as_deref())?;
        let mut out = std::io::stdout();

        provision::print_banner(&config, &mut out)?;

        let mut stdin = BufReader::new(tokio::io::stdin());
        let token = credential::acquire(self.token, &mut stdin, &mut out).await?;

        let provider = GitHubProvider::new(&config)?.verbose(self.verbose);
        let runner = SystemCommandRunner;

        Provisioner::new(&provider, &runner, &config)
            .verbose(self.verbose)
            .run(token.as_deref(), &mut out)
            .await
    }
}

/// Fold a run result into its terminal status, plus the text to print when
/// the run ended in an unexpected error.
pub fn conclude(result: anyhow::Result<RunStatus>) -> (RunStatus, Option<String>) {
    match result {
        Ok(status) => (status, None),
        Err(e) => (RunStatus::Failed, Some(format!("Unexpected error: {:#}", e))),
    }
}
