use crate::config::AssistantConfig;
use crate::github::error::UpstreamError;
use crate::projection::{project_issues, project_repositories};
use crate::types::{IssueSummary, Owner, RepositoryName, RepositorySummary, SearchQuery};

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tokio::time::Duration;
use tracing::{debug, warn};

const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

const USER_AGENT: &str = concat!("github-assistant/", env!("CARGO_PKG_VERSION"));

/// Thin client over the GitHub REST API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let timeout_duration = config.request_timeout;
        let connection_timeout = std::cmp::min(
            std::cmp::max(timeout_duration, Duration::from_secs(1)),
            Duration::from_secs(10),
        );

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON_MEDIA_TYPE));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers)
            .connect_timeout(connection_timeout)
            .timeout(timeout_duration)
            .build()
            .context("Failed to build GitHub client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.as_str().trim_end_matches('/').to_string(),
            token: config.github_token.clone(),
        })
    }

    /// Issues a single GET against `path` and parses the body as JSON.
    ///
    /// `path` is appended to the configured base URL as-is, so callers must
    /// percent-encode any dynamic path segments. Query values are encoded here.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Unreachable`] when the request could not be completed
    /// - [`UpstreamError::HttpStatus`] for any non-2xx answer
    /// - [`UpstreamError::MalformedBody`] when the body is not JSON
    pub async fn fetch_json(
        &self,
        path: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query_params);

        let mut request = self.client.get(&url);
        if !query_params.is_empty() {
            request = request.query(query_params);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(UpstreamError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API request to {} failed with status {}", url, status);
            return Err(UpstreamError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(UpstreamError::from_reqwest_error)?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!("GitHub API response from {} is not JSON: {}", url, e);
            UpstreamError::from(e)
        })
    }

    /// Searches repositories and returns at most the first five results in upstream order.
    pub async fn search_repositories(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<RepositorySummary>, UpstreamError> {
        let document = self
            .fetch_json("/search/repositories", &[("q", query.as_str())])
            .await?;
        project_repositories(&document)
    }

    /// Lists the first five issues of a repository in upstream order.
    pub async fn list_repository_issues(
        &self,
        owner: &Owner,
        repo: &RepositoryName,
    ) -> Result<Vec<IssueSummary>, UpstreamError> {
        let path = format!(
            "/repos/{}/{}/issues",
            urlencoding::encode(owner.as_str()),
            urlencoding::encode(repo.as_str())
        );
        let document = self.fetch_json(&path, &[]).await?;
        project_issues(&document)
    }
}
