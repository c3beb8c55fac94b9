//! HTTP client for the `/sendChat` endpoint.

use upcase_server::infrastructure::dto::{
    ErrorResponseDto, SendChatRequestDto, SendChatResponseDto,
};

use crate::error::ClientError;

/// Thin wrapper around `reqwest::Client` bound to one server.
#[derive(Debug, Clone)]
pub struct ChatApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send_chat_url(&self) -> String {
        format!("{}/sendChat", self.base_url)
    }

    /// Send `text` and return the server's reply text.
    ///
    /// # Errors
    ///
    /// * `ClientError::Request` - the request failed or the reply was not valid JSON
    /// * `ClientError::Status` - the server rejected the message
    pub async fn send_chat(&self, text: &str) -> Result<String, ClientError> {
        let request = SendChatRequestDto {
            user_message: text.to_string(),
        };

        let response = self
            .http
            .post(self.send_chat_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponseDto>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            return Err(ClientError::Status { status, message });
        }

        let body: SendChatResponseDto = response.json().await?;
        Ok(body.user_message)
    }
}
