//! Integration tests: the create-then-push flow with recorded collaborators.
//!
//! The provider and git are replaced by fakes that record every call, so
//! these tests check what gets printed, which steps run, and the final status.

use std::sync::Mutex;

use async_trait::async_trait;
use gh_provision::cli::credential;
use gh_provision::cli::{Provisioner, RunStatus};
use gh_provision::core::config::{ProvisionConfig, RepositoryDescriptor};
use gh_provision::core::git::{CommandOutput, CommandRunner};
use gh_provision::core::outcome::Outcome;
use gh_provision::providers::RepositoryProvider;

// ---------- Fakes ----------

struct FakeProvider {
    outcome: Outcome,
    tokens: Mutex<Vec<String>>,
}

impl FakeProvider {
    fn returning(outcome: Outcome) -> Self {
        Self {
            outcome,
            tokens: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepositoryProvider for FakeProvider {
    async fn create(&self, token: &str, _repository: &RepositoryDescriptor) -> Outcome {
        self.tokens.lock().unwrap().push(token.to_string());
        self.outcome.clone()
    }
}

struct FakeGit {
    output: CommandOutput,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeGit {
    fn exiting(success: bool, stderr: &str) -> Self {
        Self {
            output: CommandOutput {
                success,
                stderr: stderr.to_string(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeGit {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        assert_eq!(program, "git");
        self.calls.lock().unwrap().push(args.to_vec());
        Ok(self.output.clone())
    }
}

async fn run_flow(
    provider: &FakeProvider,
    git: &FakeGit,
    token: Option<&str>,
) -> (RunStatus, String) {
    let config = ProvisionConfig::default();
    let mut out = Vec::new();
    let status = Provisioner::new(provider, git, &config)
        .run(token, &mut out)
        .await
        .unwrap();
    (status, String::from_utf8(out).unwrap())
}

// ---------- Tests ----------

#[tokio::test]
async fn test_created_and_pushed() {
    let provider = FakeProvider::returning(Outcome::ok("https://github.com/nirav2000/UI-template"));
    let git = FakeGit::exiting(true, "");

    let (status, printed) = run_flow(&provider, &git, Some("abc123")).await;

    assert_eq!(status, RunStatus::Succeeded);
    assert_eq!(provider.calls(), vec!["abc123".to_string()]);
    assert!(printed.contains("Creating repository: nirav2000/UI-template"));
    assert!(printed.contains("Repository created successfully!"));
    assert!(printed.contains("https://github.com/nirav2000/UI-template"));
    assert!(printed.contains("Code pushed successfully!"));
    assert!(printed.contains("Success!"));
    assert!(printed.contains("Next steps:"));
    assert!(printed.contains("npm run dev"));
}

#[tokio::test]
async fn test_push_runs_once_with_same_token() {
    let provider = FakeProvider::returning(Outcome::ok("https://github.com/nirav2000/UI-template"));
    let git = FakeGit::exiting(true, "");

    run_flow(&provider, &git, Some("abc123")).await;

    let calls = git.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![
            "push".to_string(),
            "https://abc123@github.com/nirav2000/UI-template.git".to_string(),
            "main".to_string(),
            "-u".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_scope_error_skips_push() {
    let provider =
        FakeProvider::returning(Outcome::failed("Resource not accessible by integration"));
    let git = FakeGit::exiting(true, "");

    let (status, printed) = run_flow(&provider, &git, Some("abc123")).await;

    assert_eq!(status, RunStatus::Failed);
    assert!(git.calls().is_empty());
    assert!(printed.contains("Failed to create repository: Resource not accessible by integration"));
    assert!(printed.contains("Your token doesn't have the 'repo' scope."));
    assert!(printed.contains("https://github.com/settings/tokens"));
    assert!(printed.contains("Or create the repository manually:"));
    assert!(printed.contains("https://github.com/new"));
}

#[tokio::test]
async fn test_other_rejection_has_no_scope_hint() {
    let provider = FakeProvider::returning(Outcome::failed("Bad credentials"));
    let git = FakeGit::exiting(true, "");

    let (status, printed) = run_flow(&provider, &git, Some("abc123")).await;

    assert_eq!(status, RunStatus::Failed);
    assert!(git.calls().is_empty());
    assert!(printed.contains("Bad credentials"));
    assert!(!printed.contains("'repo' scope"));
    assert!(printed.contains("Repository name: UI-template"));
}

#[tokio::test]
async fn test_push_failure_prints_stderr() {
    let provider = FakeProvider::returning(Outcome::ok("https://github.com/nirav2000/UI-template"));
    let git = FakeGit::exiting(false, "fatal: Authentication failed");

    let (status, printed) = run_flow(&provider, &git, Some("abc123")).await;

    assert_eq!(status, RunStatus::Failed);
    assert!(printed.contains("Push failed: fatal: Authentication failed"));
    assert!(printed.contains(
        "git push https://YOUR_TOKEN@github.com/nirav2000/UI-template.git main"
    ));
    assert!(!printed.contains("Success!"));
    assert!(!printed.contains("abc123"));
}

#[tokio::test]
async fn test_empty_stdin_fails_without_network() {
    let provider = FakeProvider::returning(Outcome::ok("unused"));
    let git = FakeGit::exiting(true, "");

    let mut input: &[u8] = b"\n";
    let mut prompt = Vec::new();
    let token = credential::acquire(None, &mut input, &mut prompt)
        .await
        .unwrap();

    let (status, printed) = run_flow(&provider, &git, token.as_deref()).await;

    assert_eq!(status, RunStatus::Failed);
    assert!(provider.calls().is_empty());
    assert!(git.calls().is_empty());
    assert!(printed.contains("No token provided. Exiting."));
    assert!(printed.contains("To create the repository manually:"));
    assert!(printed.contains("git push -u origin main"));
}
