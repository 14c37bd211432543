use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use github_assistant::config::AssistantConfig;
use github_assistant::tools::functions::issue::{OWNER_PARAM, REPO_PARAM};
use github_assistant::tools::functions::repository::QUERY_PARAM;
use github_assistant::tools::{GitHubAssistantTools, Operation, ParameterBag};
use github_assistant::types::ResultEnvelope;

#[derive(Parser)]
#[command(name = "github-assistant-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "GitHub Assistant CLI - run assistant operations against the GitHub REST API from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// GitHub personal access token for API access (can also be set via the GITHUB_TOKEN environment variable)
    #[arg(long, global = true)]
    github_token: Option<String>,
    /// GitHub REST API base URL (can also be set via the GITHUB_ASSISTANT_API_URL environment variable)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Request timeout in seconds for GitHub API calls (minimum 1, default: 10 seconds)
    #[arg(long, global = true)]
    request_timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the operation manifest served by /mcp/discover
    Discover,
    /// Search repositories and print the first five hits
    SearchRepos {
        /// Search query in GitHub search syntax (e.g., "flask language:python")
        query: String,
    },
    /// List the first five issues of a repository
    RepoIssues {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },
    /// Run any operation by name, as POST /mcp/execute would
    Execute {
        /// Operation name (e.g., search_repositories)
        endpoint: String,
        /// Parameter as key=value; may be repeated
        #[arg(short, long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = AssistantConfig::resolve(cli.github_token, cli.api_url, cli.request_timeout, None)?;
    let tools = GitHubAssistantTools::new(&config)?;

    let envelope = match cli.command {
        Commands::Discover => {
            let manifest = serde_json::to_string_pretty(tools.describe())
                .context("Failed to serialize manifest")?;
            println!("{}", manifest);
            return Ok(());
        }
        Commands::SearchRepos { query } => {
            let params: ParameterBag = [(QUERY_PARAM, query)].into_iter().collect();
            tools
                .dispatch(Operation::SearchRepositories.as_ref(), &params)
                .await
        }
        Commands::RepoIssues { owner, repo } => {
            let params: ParameterBag = [(OWNER_PARAM, owner), (REPO_PARAM, repo)].into_iter().collect();
            tools
                .dispatch(Operation::GetRepoIssues.as_ref(), &params)
                .await
        }
        Commands::Execute { endpoint, params } => {
            let params: ParameterBag = params.into_iter().collect();
            tools.dispatch(&endpoint, &params).await
        }
    };

    print_envelope(&envelope)?;
    if envelope.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_envelope(envelope: &ResultEnvelope) -> Result<()> {
    let output = serde_json::to_string_pretty(envelope).context("Failed to serialize result")?;
    println!("{}", output);
    Ok(())
}
