use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, middleware, web};
use anyhow::{Context, Result};

use crate::config::AssistantConfig;
use crate::tools::{ExecuteRequest, GitHubAssistantTools};
use crate::types::ResultEnvelope;

/// Body of `GET /`
pub const STATUS_MESSAGE: &str = "GitHub Assistant API is running! Try /mcp/discover";

/// Error returned when an execute body cannot be decoded
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// GET /
///
/// Plain text liveness message.
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(STATUS_MESSAGE)
}

/// GET /mcp/discover
///
/// Static manifest of the available operations and their parameters.
pub async fn discover(tools: web::Data<GitHubAssistantTools>) -> HttpResponse {
    HttpResponse::Ok().json(tools.describe())
}

/// POST /mcp/execute
///
/// Runs one operation. Every dispatch outcome, including unknown endpoints
/// and upstream failures, is answered with 200 and a result envelope.
pub async fn execute(
    tools: web::Data<GitHubAssistantTools>,
    body: web::Json<ExecuteRequest>,
) -> HttpResponse {
    let envelope = tools.execute(&body).await;
    HttpResponse::Ok().json(envelope)
}

/// Registers the routes. The caller provides `web::Data<GitHubAssistantTools>`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(home))
        .route("/mcp/discover", web::get().to(discover))
        .route("/mcp/execute", web::post().to(execute));
}

/// Answers undecodable bodies with an error envelope instead of the framework's
/// own error text.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected execute request body: {}", err);
    let response = HttpResponse::BadRequest().json(ResultEnvelope::error(INVALID_BODY_MESSAGE));
    InternalError::from_response(err, response).into()
}

pub struct HttpServerApp {
    config: AssistantConfig,
}

impl HttpServerApp {
    /// Creates a new HTTP server application instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Resolved process configuration, including the bind address
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    /// Binds the configured address and serves requests until the process
    /// receives Ctrl+C, then shuts down gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The GitHub client cannot be built
    /// - The server fails to bind to the configured address
    pub async fn serve(self) -> Result<()> {
        let tools = GitHubAssistantTools::new(&self.config)?;
        let tools = web::Data::new(tools);

        if self.config.github_token.is_some() {
            tracing::info!("Using GitHub token for upstream requests");
        } else {
            tracing::warn!("No GitHub token configured; upstream requests are unauthenticated");
        }
        tracing::info!("Upstream GitHub API: {}", self.config.api_base_url);
        tracing::info!("Server is starting on http://{}", self.config.bind_addr);

        HttpServer::new(move || {
            App::new()
                .app_data(tools.clone())
                .wrap(middleware::Logger::default())
                .configure(configure_routes)
        })
        .bind(self.config.bind_addr)
        .with_context(|| format!("Failed to bind {}", self.config.bind_addr))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
