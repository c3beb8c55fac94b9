//! Upcase CLI chat client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin upcase-client -- --url http://127.0.0.1:8080
//! ```

use clap::Parser;
use upcase_client::ClientConfig;
use upcase_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ClientConfig::parse();

    // Keep the terminal quiet unless RUST_LOG asks for more
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    if let Err(e) = upcase_client::run_client(&config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
