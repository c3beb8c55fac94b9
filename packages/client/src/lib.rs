//! Upcase CLI chat client library.
//!
//! Reads lines from the terminal, sends them to `POST /sendChat` and prints
//! the server's reply.

pub mod api;
pub mod config;
pub mod error;
pub mod repl;

pub use api::ChatApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use repl::run as run_client;
