//! Axum server and routes.

use crate::ServerConfig;
use axum::{
    body::Bytes,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use echo_types::{ChatReply, ChatRequest};
use tower_http::cors::CorsLayer;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// An owned server instance; configuration is fixed at construction.
pub struct EchoServer {
    config: ServerConfig,
}

impl EchoServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn router(&self) -> Router {
        router()
    }

    /// Bind `config.listen` and serve until the process exits.
    pub async fn serve(self) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.config.listen).await?;
        tracing::info!("echo API listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router().into_make_service()).await
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/messages", post(handle_message))
        .route("/health", get(handle_health))
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
}

async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// Takes raw bytes so a missing or malformed body falls back to an empty message.
// Body size is unbounded; the default 2 MiB extractor limit is disabled in `router`.
async fn handle_message(body: Bytes) -> Json<ChatReply> {
    let req = match ChatRequest::parse(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::debug!(error = %e, "unreadable chat body, echoing empty message");
            ChatRequest::default()
        }
    };
    let message = req.message_text();
    tracing::debug!(message_len = message.len(), "echo");
    Json(ChatReply::echo(&message))
}

async fn handle_health() -> &'static str {
    "ok"
}

async fn handle_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}
