//! Request and reply DTOs for `POST /messages`.

use crate::EchoError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed text every reply starts with.
pub const REPLY_PREFIX: &str = "You said: ";

/// Incoming chat body. Any JSON object is accepted; only `message` is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChatRequest {
    fields: Map<String, Value>,
}

impl ChatRequest {
    /// Build a request carrying a single string message.
    pub fn with_message(message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("message".to_string(), Value::String(message.into()));
        Self { fields }
    }

    /// Strict parse of a raw body.
    pub fn parse(body: &[u8]) -> Result<Self, EchoError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(EchoError::EmptyBody);
        }
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(EchoError::NotAnObject),
        }
    }

    /// Raw `message` value, if the caller sent one.
    pub fn message(&self) -> Option<&Value> {
        self.fields.get("message")
    }

    /// The message as reply text.
    ///
    /// Missing and `null` become `""`. Strings are used verbatim. Every other
    /// JSON value is rendered as its compact JSON text (`42`, `true`, `[1,2]`).
    pub fn message_text(&self) -> String {
        match self.message() {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Outgoing chat body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn echo(message: &str) -> Self {
        Self {
            reply: format!("{}{}", REPLY_PREFIX, message),
        }
    }
}
