//! Infrastructure layer: wire-level data transfer objects.

pub mod dto;
