use async_trait::async_trait;
use tokio::process::Command;

use crate::core::config::ProvisionConfig;
use crate::core::outcome::Outcome;
use crate::core::style;

pub const PUSH_SUCCESS_MESSAGE: &str = "Code pushed successfully!";

/// What the CLI flow needs back from an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stderr: String,
}

/// Runs an external program to completion.
///
/// The push runner only talks to git through this, so tests can record
/// invocations instead of spawning processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput>;
}

/// Spawns real processes with captured output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await?;

        Ok(CommandOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Pushes the configured branch to the freshly created repository.
///
/// We shell out to git rather than linking a git library: the system git
/// already handles credential helpers, proxies and hooks.
pub struct PushRunner<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a ProvisionConfig,
    verbose: bool,
}

impl<'a, R: CommandRunner> PushRunner<'a, R> {
    pub fn new(runner: &'a R, config: &'a ProvisionConfig, verbose: bool) -> Self {
        Self {
            runner,
            config,
            verbose,
        }
    }

    /// `https://<token>@host/owner/name.git`, or the named remote without a token.
    pub fn remote_for(&self, token: Option<&str>) -> String {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => authenticated_url(self.config, token),
            None => self.config.push.remote.clone(),
        }
    }

    pub fn push_args(&self, remote: &str) -> Vec<String> {
        vec![
            "push".to_string(),
            remote.to_string(),
            self.config.push.branch.clone(),
            "-u".to_string(),
        ]
    }

    /// Run `git push <remote> <branch> -u`. Never fails: every problem is
    /// folded into the returned [`Outcome`].
    pub async fn push(&self, token: Option<&str>) -> Outcome {
        let remote = self.remote_for(token);
        let args = self.push_args(&remote);

        if self.verbose {
            let shown = match token {
                Some(token) if !token.is_empty() => redact(&args.join(" "), token),
                _ => args.join(" "),
            };
            eprintln!("{}", style::debug(&format!("running: git {}", shown)));
        }

        match self.runner.run("git", &args).await {
            Ok(output) if output.success => Outcome::ok(PUSH_SUCCESS_MESSAGE),
            Ok(output) => Outcome::failed(output.stderr),
            Err(e) => Outcome::failed(format!("Failed to run `git push`: {}. Is git installed?", e)),
        }
    }
}

fn authenticated_url(config: &ProvisionConfig, token: &str) -> String {
    format!(
        "https://{}@{}/{}.git",
        token,
        config.github.host,
        config.repository.full_name()
    )
}

/// Replace every occurrence of the token with `***` for display.
pub fn redact(text: &str, token: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }
    text.replace(token, "***")
}
