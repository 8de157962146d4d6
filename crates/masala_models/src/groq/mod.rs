//! Groq chat completions integration.
//!
//! Groq exposes the OpenAI chat completions format; schema-constrained
//! generation rides on the `response_format: json_schema` request field.

mod client;
mod config;
mod conversions;
mod dto;

pub use client::GroqClient;
pub use config::{GroqConfig, GroqConfigBuilder};
pub use dto::{ChatMessage, ChatRequest, ChatResponse};
