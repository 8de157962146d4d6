//! HTTP API for the masala recipe generation service.

mod api;
mod config;

pub use api::{AppState, ERROR_MESSAGE, create_router};
pub use config::ServerConfig;
