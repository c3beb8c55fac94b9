//! HTTP server implementation.

pub mod error;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::{build_app, build_router};
pub use runner::{run, serve};
