use serde::{Deserialize, Serialize};

use super::{IssueSummary, RepositorySummary};

/// Uniform response wrapper for every dispatched operation.
///
/// Exactly one key is present on the wire:
/// `{"repositories": [...]}`, `{"issues": [...]}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultEnvelope {
    Repositories(Vec<RepositorySummary>),
    Issues(Vec<IssueSummary>),
    Error(String),
}

impl ResultEnvelope {
    pub fn error<T: Into<String>>(message: T) -> Self {
        Self::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
