//! HTTP API request/response DTOs for the upcase chat service.

use serde::{Deserialize, Serialize};

use crate::domain::Message;

/// Request body of `POST /sendChat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendChatRequestDto {
    pub user_message: String,
}

impl From<SendChatRequestDto> for Message {
    fn from(dto: SendChatRequestDto) -> Self {
        Message::new(dto.user_message)
    }
}

/// Response body of `POST /sendChat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendChatResponseDto {
    pub user_message: String,
}

impl From<Message> for SendChatResponseDto {
    fn from(message: Message) -> Self {
        Self {
            user_message: message.into_text(),
        }
    }
}

/// Error body returned for rejected requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    /// Short machine readable error kind (e.g. `invalid_body`)
    pub error: String,
    /// Human readable detail
    pub message: String,
}
