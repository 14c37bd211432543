//! Operation dispatch for the GitHub assistant
//!
//! This module accepts an operation name plus a parameter bag, routes it to
//! the registered handler and folds every outcome into a [`ResultEnvelope`].
//!
//! ## Operations
//!
//! - `search_repositories`: repository search, first five hits
//! - `get_repo_issues`: issue listing of one repository, first five issues

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::AssistantConfig;
use crate::github::GitHubClient;
use crate::types::ResultEnvelope;

/// Static capability manifest
pub mod discovery;

/// Error types specific to tool operations
pub mod error;

/// Tool function implementations organized by functionality
pub mod functions;

/// Parameter bag passed to every handler
pub mod params;

/// Operation name to handler mapping
pub mod registry;

pub use discovery::{DiscoveryManifest, describe};
pub use error::ToolError;
pub use params::ParameterBag;
pub use registry::{Handler, Operation, OperationRegistry};

/// Body of an execute request: `{"endpoint": "...", "parameters": {...}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
}

/// Dispatcher exposing the registered operations over a shared GitHub client
#[derive(Clone)]
pub struct GitHubAssistantTools {
    github_client: GitHubClient,
    registry: OperationRegistry,
}

impl GitHubAssistantTools {
    pub fn new(config: &AssistantConfig) -> anyhow::Result<Self> {
        let github_client = GitHubClient::new(config)?;
        Ok(Self::with_client(github_client))
    }

    pub fn with_client(github_client: GitHubClient) -> Self {
        Self {
            github_client,
            registry: OperationRegistry::new(),
        }
    }

    /// Runs `operation_name` with `parameters`.
    ///
    /// Unknown operations and missing parameters are answered without any
    /// upstream call.
    pub async fn dispatch(&self, operation_name: &str, parameters: &ParameterBag) -> ResultEnvelope {
        let (operation, handler) = match self.registry.resolve(operation_name) {
            Ok(resolved) => resolved,
            Err(e) => return self.failure(operation_name, e),
        };
        self.run(operation, handler, parameters).await
    }

    /// Runs a decoded execute request. The operation is resolved before the
    /// parameters are inspected.
    pub async fn execute(&self, request: &ExecuteRequest) -> ResultEnvelope {
        let operation_name = request.endpoint.as_deref().unwrap_or_default();
        let (operation, handler) = match self.registry.resolve(operation_name) {
            Ok(resolved) => resolved,
            Err(e) => return self.failure(operation_name, e),
        };

        let parameters = match &request.parameters {
            Some(map) => match ParameterBag::from_json_map(map) {
                Ok(bag) => bag,
                Err(e) => return self.failure(operation_name, e),
            },
            None => ParameterBag::new(),
        };

        self.run(operation, handler, &parameters).await
    }

    /// Static capability manifest
    pub fn describe(&self) -> &'static DiscoveryManifest {
        describe()
    }

    async fn run(
        &self,
        operation: Operation,
        handler: Handler,
        parameters: &ParameterBag,
    ) -> ResultEnvelope {
        tracing::info!("Dispatching operation {}", operation);
        match handler(&self.github_client, parameters).await {
            Ok(envelope) => envelope,
            Err(e) => self.failure(operation.as_ref(), e),
        }
    }

    fn failure(&self, operation_name: &str, error: ToolError) -> ResultEnvelope {
        match &error {
            ToolError::Upstream(upstream) => {
                tracing::error!("Operation {} failed: {}", operation_name, upstream)
            }
            ToolError::UnknownOperation(name) => {
                tracing::warn!("Rejected unknown operation {:?}", name)
            }
            _ => tracing::warn!("Operation {} rejected: {}", operation_name, error),
        }
        ResultEnvelope::error(error)
    }
}
