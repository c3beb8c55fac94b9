//! Command line configuration for the client binary.

use clap::Parser;

/// Default server base URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Upcase chat client
#[derive(Debug, Clone, Parser)]
#[command(name = "upcase-client", version, about)]
pub struct ClientConfig {
    /// Base URL of the upcase server
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub url: String,
}
