//! Projections from GitHub REST documents to client-facing summaries
//!
//! Only the first [`RESULT_WINDOW`] entries of a document are inspected. A
//! kept entry that lacks a required field fails the whole projection with
//! [`UpstreamError::MalformedBody`]; entries past the window are ignored even
//! when malformed.

use serde::Deserialize;
use serde_json::Value;

use crate::github::error::UpstreamError;
use crate::types::{IssueNumber, IssueState, IssueSummary, RepositorySummary};

/// Number of entries returned per operation
pub const RESULT_WINDOW: usize = 5;

/// Fields read from one item of `GET /search/repositories`
#[derive(Debug, Deserialize)]
struct RepositoryItem {
    full_name: String,
    #[serde(default)]
    description: Option<String>,
    stargazers_count: u64,
    html_url: String,
}

impl From<RepositoryItem> for RepositorySummary {
    fn from(item: RepositoryItem) -> Self {
        Self {
            full_name: item.full_name,
            description: item.description,
            star_count: item.stargazers_count,
            url: item.html_url,
        }
    }
}

/// Fields read from one item of `GET /repos/{owner}/{repo}/issues`
#[derive(Debug, Deserialize)]
struct IssueItem {
    title: String,
    number: u64,
    state: String,
    html_url: String,
}

impl TryFrom<IssueItem> for IssueSummary {
    type Error = String;

    fn try_from(item: IssueItem) -> Result<Self, Self::Error> {
        let number = IssueNumber::new(item.number)
            .ok_or_else(|| format!("issue number must be positive, got {}", item.number))?;
        Ok(Self {
            title: item.title,
            number,
            state: IssueState::parse(&item.state),
            url: item.html_url,
        })
    }
}

/// Projects a repository search document (`{"items": [...]}`).
pub fn project_repositories(document: &Value) -> Result<Vec<RepositorySummary>, UpstreamError> {
    let items = document
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            UpstreamError::MalformedBody("search response has no `items` array".to_string())
        })?;

    items
        .iter()
        .take(RESULT_WINDOW)
        .enumerate()
        .map(|(index, item)| {
            RepositoryItem::deserialize(item)
                .map(RepositorySummary::from)
                .map_err(|e| malformed_item("repository", index, e))
        })
        .collect()
}

/// Projects an issue listing document (a bare JSON array).
pub fn project_issues(document: &Value) -> Result<Vec<IssueSummary>, UpstreamError> {
    let items = document.as_array().ok_or_else(|| {
        UpstreamError::MalformedBody("issue listing response is not an array".to_string())
    })?;

    items
        .iter()
        .take(RESULT_WINDOW)
        .enumerate()
        .map(|(index, item)| {
            let item = IssueItem::deserialize(item).map_err(|e| malformed_item("issue", index, e))?;
            IssueSummary::try_from(item).map_err(|e| malformed_item("issue", index, e))
        })
        .collect()
}

fn malformed_item(kind: &str, index: usize, cause: impl std::fmt::Display) -> UpstreamError {
    UpstreamError::MalformedBody(format!("{} item {}: {}", kind, index, cause))
}
