//! HTTP client for the echo chat API (`POST /messages`, `GET /health`).

use echo_types::{ChatReply, ChatRequest};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("echo API error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("response has no reply field")]
    MissingReply,
}

pub struct EchoClient {
    client: reqwest::Client,
    base_url: String,
}

impl EchoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ECHO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post one message and return the reply text.
    pub async fn send(&self, message: &str) -> Result<String, ClientError> {
        self.post_messages(&ChatRequest::with_message(message)).await
    }

    /// Post an arbitrary request body to `/messages`.
    pub async fn post_messages(&self, req: &ChatRequest) -> Result<String, ClientError> {
        let url = format!("{}/messages", self.base_url);
        tracing::debug!(%url, "posting message");
        let res = self.client.post(&url).json(req).send().await?;
        let body = Self::checked_body(res).await?;
        let reply: ChatReply =
            serde_json::from_str(&body).map_err(|_| ClientError::MissingReply)?;
        Ok(reply.reply)
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.base_url);
        let res = self.client.get(&url).send().await?;
        Self::checked_body(res).await?;
        Ok(())
    }

    async fn checked_body(res: reqwest::Response) -> Result<String, ClientError> {
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }
        Ok(body)
    }
}
