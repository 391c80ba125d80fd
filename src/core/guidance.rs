//! Remediation text printed when provisioning can't finish on its own.
//!
//! Each builder returns the lines to print, already styled, so the CLI flow
//! only decides *which* guidance applies.

use crate::core::config::ProvisionConfig;
use crate::core::style;

const NEW_REPOSITORY_URL: &str = "https://github.com/new";
const TOKEN_SETTINGS_URL: &str = "https://github.com/settings/tokens";

/// Whether a creation error looks like a token without the `repo` scope.
///
/// GitHub reports this as free text, so this is a substring heuristic on
/// the provider's wording.
pub fn is_permission_error(message: &str) -> bool {
    message.contains("Resource not accessible") || message.contains("403")
}

/// Steps to create the repository through the web UI and push by hand.
pub fn manual_setup(config: &ProvisionConfig) -> Vec<String> {
    let repo = &config.repository;
    vec![
        style::numbered(1, &format!("Visit: {}", style::url(NEW_REPOSITORY_URL))),
        style::numbered(2, &format!("Repository name: {}", repo.name)),
        style::numbered(3, &format!("Description: {}", repo.description)),
        style::numbered(
            4,
            "Click 'Create repository' (don't initialize with any files)",
        ),
        style::numbered(
            5,
            &format!(
                "Run: {}",
                style::command(&format!(
                    "git push -u {} {}",
                    config.push.remote, config.push.branch
                ))
            ),
        ),
    ]
}

/// How to mint a token that can create repositories.
pub fn scope_remediation() -> Vec<String> {
    vec![
        style::warning("Your token doesn't have the 'repo' scope."),
        String::new(),
        style::section("To fix this:"),
        style::numbered(1, &format!("Visit: {}", style::url(TOKEN_SETTINGS_URL))),
        style::numbered(2, "Create a new token with 'repo' scope"),
        style::numbered(3, "Run this command again with the new token"),
    ]
}

/// Push command template with a placeholder instead of the real token.
pub fn manual_push(config: &ProvisionConfig) -> String {
    format!(
        "  {}",
        style::command(&format!(
            "git push https://YOUR_TOKEN@{}/{}.git {}",
            config.github.host,
            config.repository.full_name(),
            config.push.branch
        ))
    )
}

/// Usage hints shown once the repository is live.
pub fn next_steps(config: &ProvisionConfig) -> Vec<String> {
    config
        .next_steps
        .iter()
        .enumerate()
        .map(|(i, step)| style::numbered(i + 1, step))
        .collect()
}
