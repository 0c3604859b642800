//! Echo chat REST API.

pub mod config;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use server::EchoServer;
