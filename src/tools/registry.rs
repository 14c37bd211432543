//! Operation registry
//!
//! Maps each [`Operation`] to its handler. The mapping is built once when the
//! dispatcher is constructed and never changes afterwards.

use std::collections::HashMap;
use std::str::FromStr;

use futures::future::BoxFuture;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use super::discovery::{OperationDescriptor, ParameterDescriptor};
use super::error::ToolError;
use super::functions;
use super::params::ParameterBag;
use crate::github::GitHubClient;
use crate::types::ResultEnvelope;

/// Operations exposed by the dispatcher. Names match case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    SearchRepositories,
    GetRepoIssues,
}

impl Operation {
    /// Static description of the operation, as published by discovery
    pub fn descriptor(self) -> OperationDescriptor {
        match self {
            Operation::SearchRepositories => OperationDescriptor {
                operation: self,
                description: "Search for GitHub repositories",
                parameters: vec![ParameterDescriptor::required_string(
                    functions::repository::QUERY_PARAM,
                    "Search query string",
                )],
            },
            Operation::GetRepoIssues => OperationDescriptor {
                operation: self,
                description: "Get issues for a specific repository",
                parameters: vec![
                    ParameterDescriptor::required_string(
                        functions::issue::OWNER_PARAM,
                        "Repository owner",
                    ),
                    ParameterDescriptor::required_string(
                        functions::issue::REPO_PARAM,
                        "Repository name",
                    ),
                ],
            },
        }
    }
}

pub type Handler = for<'a> fn(
    &'a GitHubClient,
    &'a ParameterBag,
) -> BoxFuture<'a, Result<ResultEnvelope, ToolError>>;

#[derive(Clone)]
pub struct OperationRegistry {
    handlers: HashMap<Operation, Handler>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        let handlers = Operation::iter()
            .map(|operation| (operation, handler_for(operation)))
            .collect();
        Self { handlers }
    }

    /// Looks up an operation by its wire name
    pub fn resolve(&self, name: &str) -> Result<(Operation, Handler), ToolError> {
        let operation = Operation::from_str(name)
            .map_err(|_| ToolError::UnknownOperation(name.to_string()))?;
        self.handlers
            .get(&operation)
            .map(|handler| (operation, *handler))
            .ok_or_else(|| ToolError::UnknownOperation(name.to_string()))
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn handler_for(operation: Operation) -> Handler {
    match operation {
        Operation::SearchRepositories => functions::repository::search_repositories as Handler,
        Operation::GetRepoIssues => functions::issue::get_repo_issues as Handler,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_wire_names() {
        assert_eq!(Operation::SearchRepositories.as_ref(), "search_repositories");
        assert_eq!(Operation::GetRepoIssues.to_string(), "get_repo_issues");
    }

    #[test]
    fn test_resolve_known_operations() {
        let registry = OperationRegistry::new();
        let (operation, _) = registry.resolve("search_repositories").unwrap();
        assert_eq!(operation, Operation::SearchRepositories);
        let (operation, _) = registry.resolve("get_repo_issues").unwrap();
        assert_eq!(operation, Operation::GetRepoIssues);
    }

    #[test]
    fn test_resolve_is_exact_and_case_sensitive() {
        let registry = OperationRegistry::new();
        for name in [
            "Search_Repositories",
            "SEARCH_REPOSITORIES",
            "searchRepositories",
            " get_repo_issues",
            "",
        ] {
            assert!(
                matches!(registry.resolve(name), Err(ToolError::UnknownOperation(_))),
                "{name:?} should not resolve"
            );
        }
    }

    #[test]
    fn test_every_operation_has_a_handler() {
        let registry = OperationRegistry::new();
        for operation in Operation::iter() {
            assert!(registry.resolve(operation.as_ref()).is_ok());
        }
    }
}
