//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::send_chat;
