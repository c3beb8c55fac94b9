//! Shared utilities for Upcase server and client.

pub mod logger;
