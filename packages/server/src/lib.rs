//! Upcase chat server library.
//!
//! A single `POST /sendChat` endpoint that replies with the user's message
//! upper-cased.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub use config::ServerConfig;
pub use ui::{build_app, run as run_server, serve};
