// src/github/fetch.rs
// =============================================================================
// This module lists a user's public repositories through the GitHub REST API.
//
// Strategy:
// - One GET against /users/{username}/repos (the API's default page)
// - Send a User-Agent, GitHub refuses requests without one
// - Attach the token as a bearer credential when the operator gave one
// - Decode the body into typed records so a changed API shape is reported
//   as a schema error instead of blowing up somewhere downstream
//
// Rust concepts:
// - async functions: The request is the only blocking step of the run
// - serde: Derive-based decoding of the JSON array
// - Result + ?: Every failure is a ReportError the caller can match on
// =============================================================================

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};

const USER_AGENT: &str = concat!("github-repo-report/", env!("CARGO_PKG_VERSION"));

/// One repository exactly as the API returns it (only the fields we use).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRepository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    /// ISO 8601 UTC, e.g. "2020-01-01T00:00:00Z"
    pub created_at: String,
    pub updated_at: String,
    pub html_url: String,
}

// Fetches the repositories of `config.username`
//
// Returns:
//   Ok(repos): the API answered 2xx (the list may legitimately be empty)
//   Err(ReportError::Api): non-2xx, carries the status code and body
//   Err(ReportError::Schema): 2xx but the body is not what we expect
//   Err(ReportError::Http): the request itself failed
pub async fn fetch_user_repos(config: &ReportConfig) -> Result<Vec<RawRepository>> {
    let url = repos_url(&config.api_base, &config.username)?;

    let client = Client::builder().user_agent(USER_AGENT).build()?;

    let mut request = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json");
    if let Some(token) = &config.token {
        request = request.bearer_auth(token);
    }

    tracing::info!(%url, authenticated = config.token.is_some(), "fetching repositories");
    let response = request.send().await?;
    let status = response.status();

    // Read the body as text first: it goes into the error on failure and
    // through serde_json on success
    let body = response.text().await?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "repository listing failed");
        return Err(ReportError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let repos = parse_repos(&body)?;
    tracing::debug!(count = repos.len(), "decoded repositories");
    Ok(repos)
}

// Builds the listing URL for a username
//
// Example:
//   ("https://api.github.com", "octocat") -> "https://api.github.com/users/octocat/repos"
fn repos_url(api_base: &str, username: &str) -> Result<String> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ReportError::Input("username must not be empty".to_string()));
    }
    if username.contains('/') || username.chars().any(char::is_whitespace) {
        return Err(ReportError::Input(format!(
            "'{}' is not a valid GitHub username",
            username
        )));
    }

    Ok(format!(
        "{}/users/{}/repos",
        api_base.trim_end_matches('/'),
        username
    ))
}

fn parse_repos(body: &str) -> Result<Vec<RawRepository>> {
    Ok(serde_json::from_str(body)?)
}
