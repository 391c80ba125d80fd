use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::RepositoryProvider;
use crate::core::config::{ProvisionConfig, RepositoryDescriptor};
use crate::core::outcome::Outcome;
use crate::core::style;

const CREATE_FOR_USER_PATH: &str = "/user/repos";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API provider
pub struct GitHubProvider {
    client: Client,
    api_url: String,
    host: String,
    verbose: bool,
}

impl GitHubProvider {
    pub fn new(config: &ProvisionConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: config.github.api_url.trim_end_matches('/').to_string(),
            host: config.github.host.clone(),
            verbose: false,
        })
    }

    /// Log the endpoint and response status to stderr.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_url, CREATE_FOR_USER_PATH)
    }

    fn fallback_url(&self, repository: &RepositoryDescriptor) -> String {
        format!("https://{}/{}", self.host, repository.full_name())
    }
}

// ---------- API response parsing ----------

/// String field of a JSON object body. Arrays and scalars carry no fields.
fn object_field(value: &Value, field: &str) -> Option<String> {
    value
        .as_object()
        .and_then(|object| object.get(field))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `html_url` from a successful create response, if the body names one.
pub fn created_url(body: &str) -> serde_json::Result<Option<String>> {
    let value: Value = serde_json::from_str(body)?;
    Ok(object_field(&value, "html_url"))
}

/// Failure text for a non-2xx response.
///
/// The API's `message` when the body is a JSON object carrying one, the
/// status line for any other object or an empty body, otherwise the raw body.
pub fn rejection_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) if value.is_object() => {
            object_field(&value, "message").unwrap_or_else(|| status_line(status))
        }
        _ if body.trim().is_empty() => status_line(status),
        _ => body.to_string(),
    }
}

fn status_line(status: StatusCode) -> String {
    format!(
        "HTTP Error {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

// ---------- RepositoryProvider implementation ----------

#[async_trait]
impl RepositoryProvider for GitHubProvider {
    async fn create(&self, token: &str, repository: &RepositoryDescriptor) -> Outcome {
        let endpoint = self.endpoint();
        if self.verbose {
            eprintln!("{}", style::debug(&format!("POST {}", endpoint)));
        }

        let response = match self
            .client
            .post(&endpoint)
            .bearer_auth(token)
            .header("Accept", GITHUB_ACCEPT)
            .header("Content-Type", "application/json")
            .json(repository)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::failed(e.to_string()),
        };

        let status = response.status();
        if self.verbose {
            eprintln!("{}", style::debug(&format!("GitHub responded {}", status)));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Outcome::failed(e.to_string()),
        };

        if !status.is_success() {
            return Outcome::failed(rejection_message(status, &body));
        }

        match created_url(&body) {
            Ok(url) => Outcome::ok(url.unwrap_or_else(|| self.fallback_url(repository))),
            Err(e) => Outcome::failed(format!("Failed to parse GitHub API response: {}", e)),
        }
    }
}
