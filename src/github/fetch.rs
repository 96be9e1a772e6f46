// src/github/fetch.rs
// =============================================================================
// This module fetches JSON from the GitHub REST API.
//
// Strategy:
// - One unauthenticated GET per call, no retries, first page only
// - Anything but a 2xx status is an error
// - The body must be JSON; decoding into concrete types happens in report.rs
//
// The `ApiSource` trait is the seam between "where the JSON comes from" and
// "how it is printed". `GithubClient` is the real implementation; tests
// plug in canned responses.
//
// Rust concepts:
// - Traits: a shared interface several types can implement
// - async functions: For network I/O
// - Result: For error handling
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// The repository the activity report is about
pub const REPO: &str = "peper0/fakeclock";

const USER_AGENT: &str = concat!("fakeclock-scripts/", env!("CARGO_PKG_VERSION"));

// Something that can answer repository-relative GETs with JSON
//
// `path` is relative to /repos/{owner}/{repo}/, e.g. "issues" or
// "pulls/12/comments".
#[allow(async_fn_in_trait)]
pub trait ApiSource {
    async fn get_json(&self, path: &str) -> Result<Value>;
}

/// reqwest-backed `ApiSource` for one repository
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    repo_url: Url,
}

impl GithubClient {
    // Parameters:
    //   api_base: e.g. "https://api.github.com" (a path prefix is allowed,
    //             as on GitHub Enterprise: "https://ghe.example.com/api/v3")
    //   repo: "owner/name"
    pub fn new(api_base: &str, repo: &str) -> Result<Self> {
        let mut base =
            Url::parse(api_base).map_err(|e| anyhow!("Invalid API URL '{}': {}", api_base, e))?;

        // Url::join replaces the last segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let repo_url = base
            .join(&format!("repos/{}/", repo))
            .with_context(|| format!("Invalid repository '{}'", repo))?;

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { client, repo_url })
    }

    /// Full URL for a repository-relative path
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.repo_url
            .join(path)
            .with_context(|| format!("Invalid API path '{}'", path))
    }
}

impl ApiSource for GithubClient {
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to fetch {}: HTTP {}",
                url,
                response.status()
            ));
        }

        let value = response
            .json::<Value>()
            .await
            .with_context(|| format!("Malformed JSON from {}", url))?;

        Ok(value)
    }
}
