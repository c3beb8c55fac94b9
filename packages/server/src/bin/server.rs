//! Upcase chat server.
//!
//! Replies to `POST /sendChat` with the user's message upper-cased.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin upcase-server -- --port 8080
//! ```

use clap::Parser;
use upcase_server::ServerConfig;
use upcase_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = upcase_server::run_server(&config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
