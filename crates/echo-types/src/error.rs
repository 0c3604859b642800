//! Errors raised while reading a chat request body.

#[derive(Debug, thiserror::Error)]
pub enum EchoError {
    #[error("request body is empty")]
    EmptyBody,
    #[error("request body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("request body is not a JSON object")]
    NotAnObject,
}
