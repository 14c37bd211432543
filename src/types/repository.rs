//! Repository domain types
//!
//! Owner and repository names are wrapped so they cannot be swapped by
//! accident when building API paths.

use serde::{Deserialize, Serialize};

/// Owner name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Owner(pub String);

impl Owner {
    pub fn new(owner: String) -> Self {
        Self(owner)
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Owner {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Repository name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RepositoryName(pub String);

impl RepositoryName {
    pub fn new(repo_name: String) -> Self {
        Self(repo_name)
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RepositoryName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Client-facing projection of one repository search hit.
///
/// Serialized with the short field names existing clients already parse:
/// `name`, `description`, `stars`, `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    #[serde(rename = "name")]
    pub full_name: String,
    /// Always serialized, as `null` when the repository has no description
    pub description: Option<String>,
    #[serde(rename = "stars")]
    pub star_count: u64,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_wire_names() {
        let summary = RepositorySummary {
            full_name: "pallets/flask".to_string(),
            description: None,
            star_count: 42,
            url: "https://github.com/pallets/flask".to_string(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "pallets/flask",
                "description": null,
                "stars": 42,
                "url": "https://github.com/pallets/flask"
            })
        );
    }
}
