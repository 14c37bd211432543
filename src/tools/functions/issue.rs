use futures::FutureExt;
use futures::future::BoxFuture;

use crate::github::GitHubClient;
use crate::tools::error::ToolError;
use crate::tools::params::ParameterBag;
use crate::types::{Owner, RepositoryName, ResultEnvelope};

pub const OWNER_PARAM: &str = "owner";
pub const REPO_PARAM: &str = "repo";

/// Handler for `get_repo_issues`
pub fn get_repo_issues<'a>(
    github_client: &'a GitHubClient,
    parameters: &'a ParameterBag,
) -> BoxFuture<'a, Result<ResultEnvelope, ToolError>> {
    async move {
        let owner = Owner::from(parameters.require(OWNER_PARAM)?);
        let repo = RepositoryName::from(parameters.require(REPO_PARAM)?);

        let issues = github_client.list_repository_issues(&owner, &repo).await?;
        tracing::debug!("get_repo_issues {}/{} returned {} issues", owner, repo, issues.len());

        Ok(ResultEnvelope::Issues(issues))
    }
    .boxed()
}
