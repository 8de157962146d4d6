//! LLM provider integration for masala.
//!
//! The sole provider is Groq, reached through its OpenAI-compatible chat
//! completions endpoint with a JSON-schema response format.

mod groq;

pub use groq::{
    ChatMessage, ChatRequest, ChatResponse, GroqClient, GroqConfig, GroqConfigBuilder,
};
