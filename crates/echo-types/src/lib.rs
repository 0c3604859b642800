//! Core types for the echo chat API.
//!
//! The wire shapes are `{"message": ...}` in and `{"reply": "You said: ..."}` out.

mod dto;
mod error;

pub use dto::*;
pub use error::*;
