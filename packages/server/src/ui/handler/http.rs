//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    domain::Message,
    infrastructure::dto::{SendChatRequestDto, SendChatResponseDto},
    ui::{error::ApiError, state::AppState},
    usecase::SendChatUseCase,
};

/// Upper-case the user's message and send it back
///
/// `POST /sendChat` with `{"userMessage": "..."}`
pub async fn send_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendChatRequestDto>, JsonRejection>,
) -> Result<Json<SendChatResponseDto>, ApiError> {
    let Json(request) = payload?;

    // Convert DTO -> Message (Domain Model)
    let message = Message::from(request);
    tracing::info!(
        "Received chat message ({} chars)",
        message.text().chars().count()
    );

    let usecase = SendChatUseCase::new(state.transformer.clone());
    let reply = usecase.execute(message);

    Ok(Json(SendChatResponseDto::from(reply)))
}
