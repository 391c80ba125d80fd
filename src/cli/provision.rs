use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;

use crate::core::config::ProvisionConfig;
use crate::core::git::{CommandRunner, PushRunner};
use crate::core::guidance;
use crate::core::style;
use crate::providers::RepositoryProvider;

/// Terminal state of a provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Succeeded => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

pub fn print_banner<W: Write>(config: &ProvisionConfig, out: &mut W) -> Result<()> {
    writeln!(out, "{}", style::rule())?;
    writeln!(
        out,
        "{}",
        style::banner_title(&format!("{} Repository Creator", config.repository.name))
    )?;
    writeln!(out, "{}", style::rule())?;
    writeln!(out)?;
    Ok(())
}

/// Create-then-push, narrating each step and the way out of every failure.
pub struct Provisioner<'a, P: RepositoryProvider, R: CommandRunner> {
    provider: &'a P,
    runner: &'a R,
    config: &'a ProvisionConfig,
    verbose: bool,
}

impl<'a, P: RepositoryProvider, R: CommandRunner> Provisioner<'a, P, R> {
    pub fn new(provider: &'a P, runner: &'a R, config: &'a ProvisionConfig) -> Self {
        Self {
            provider,
            runner,
            config,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Only terminal write failures surface as `Err`.
    pub async fn run<W: Write>(&self, token: Option<&str>, out: &mut W) -> Result<RunStatus> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            writeln!(out)?;
            writeln!(out, "{}", style::error("No token provided. Exiting."))?;
            writeln!(out)?;
            writeln!(out, "{}", style::section("To create the repository manually:"))?;
            self.write_lines(out, &guidance::manual_setup(self.config))?;
            return Ok(RunStatus::Failed);
        };

        let repo = &self.config.repository;
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            style::step(&format!("Creating repository: {}", repo.full_name()))
        )?;
        out.flush()?;

        let created = self.provider.create(token, repo).await;
        if !created.success {
            writeln!(
                out,
                "{}",
                style::error(&format!("Failed to create repository: {}", created.message))
            )?;
            writeln!(out)?;

            if guidance::is_permission_error(&created.message) {
                self.write_lines(out, &guidance::scope_remediation())?;
                writeln!(out)?;
            }

            writeln!(out, "{}", style::section("Or create the repository manually:"))?;
            self.write_lines(out, &guidance::manual_setup(self.config))?;
            writeln!(out)?;
            return Ok(RunStatus::Failed);
        }

        writeln!(out, "{}", style::success("Repository created successfully!"))?;
        writeln!(out, "  URL: {}", style::url(&created.message))?;
        writeln!(out)?;

        writeln!(out, "{}", style::step("Pushing code to repository..."))?;
        out.flush()?;

        let pushed = PushRunner::new(self.runner, self.config, self.verbose)
            .push(Some(token))
            .await;
        if !pushed.success {
            writeln!(
                out,
                "{}",
                style::warning(&format!("Push failed: {}", pushed.message))
            )?;
            writeln!(out)?;
            writeln!(out, "{}", style::section("Try pushing manually:"))?;
            writeln!(out, "{}", guidance::manual_push(self.config))?;
            return Ok(RunStatus::Failed);
        }

        writeln!(out, "{}", style::success(&pushed.message))?;
        writeln!(out)?;
        writeln!(out, "{}", style::rule())?;
        writeln!(out, "{}", style::banner_title("Success!"))?;
        writeln!(out, "{}", style::rule())?;
        writeln!(out)?;
        writeln!(out, "Your repository is now live at:")?;
        writeln!(out, "{}", style::url(&self.config.repository_url()))?;
        writeln!(out)?;

        if !self.config.next_steps.is_empty() {
            writeln!(out, "{}", style::section("Next steps:"))?;
            self.write_lines(out, &guidance::next_steps(self.config))?;
            writeln!(out)?;
        }

        Ok(RunStatus::Succeeded)
    }

    fn write_lines<W: Write>(&self, out: &mut W, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
