//! Command line configuration for the server binary.

use clap::Parser;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;

/// Upcase chat server
#[derive(Debug, Clone, Parser)]
#[command(name = "upcase-server", version, about)]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
