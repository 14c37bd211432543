use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt};

use github_assistant::config::AssistantConfig;
use github_assistant::transport::http_server::HttpServerApp;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "GitHub Assistant - HTTP service for GitHub repository search and issue listing"
)]
#[command(
    long_about = "GitHub Assistant exposes a small operation interface over HTTP. GET /mcp/discover lists the available operations and their parameters, and POST /mcp/execute runs one of them against the GitHub REST API, returning a trimmed, stable JSON result of at most five entries."
)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    address: String,

    /// Enable debug logging for troubleshooting and development
    #[arg(short, long)]
    debug: bool,

    /// GitHub personal access token for API authentication (overrides GITHUB_TOKEN environment variable)
    #[arg(short = 't', long)]
    github_token: Option<String>,

    /// GitHub REST API base URL (overrides GITHUB_ASSISTANT_API_URL environment variable)
    #[arg(long)]
    api_url: Option<String>,

    /// Timeout in seconds for a single GitHub API request (minimum 1, default: 10 seconds)
    #[arg(long)]
    request_timeout: Option<u64>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; variables may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},{}", level, env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false)) // Disable ANSI color codes
        .init();

    let config = AssistantConfig::resolve(
        cli.github_token,
        cli.api_url,
        cli.request_timeout,
        Some(cli.address),
    )?;

    tracing::info!("Press Ctrl+C to stop the server");
    HttpServerApp::new(config).serve().await
}
