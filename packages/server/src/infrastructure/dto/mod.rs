//! Data transfer objects exchanged over HTTP.

pub mod http;

pub use http::{ErrorResponseDto, SendChatRequestDto, SendChatResponseDto};
