use futures::FutureExt;
use futures::future::BoxFuture;

use crate::github::GitHubClient;
use crate::tools::error::ToolError;
use crate::tools::params::ParameterBag;
use crate::types::{ResultEnvelope, SearchQuery};

pub const QUERY_PARAM: &str = "query";

/// Handler for `search_repositories`
pub fn search_repositories<'a>(
    github_client: &'a GitHubClient,
    parameters: &'a ParameterBag,
) -> BoxFuture<'a, Result<ResultEnvelope, ToolError>> {
    async move {
        let query = SearchQuery::new(parameters.require(QUERY_PARAM)?);

        let repositories = github_client.search_repositories(&query).await?;
        tracing::debug!(
            "search_repositories '{}' returned {} repositories",
            query,
            repositories.len()
        );

        Ok(ResultEnvelope::Repositories(repositories))
    }
    .boxed()
}
