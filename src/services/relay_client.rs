// src/services/relay_client.rs
use std::time::Duration;

use thiserror::Error;

use crate::message::ChatReply;

const CHATBOT_PATH: &str = "/api/chatbot";

#[derive(Debug, Error)]
pub enum RelayClientError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay returned {0}")]
    Status(u16),
}

/// Browser-side caller of the relay's `POST /api/chatbot`.
#[derive(Clone, Debug)]
pub struct RelayClient {
    client: reqwest::Client,
    url: String,
}

impl RelayClient {
    pub fn new(relay_base_url: &str, timeout: Duration) -> Result<Self, RelayClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}{CHATBOT_PATH}", relay_base_url.trim_end_matches('/')),
        })
    }

    pub async fn send(&self, message: &str) -> Result<String, RelayClientError> {
        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayClientError::Status(status.as_u16()));
        }

        let body: ChatReply = response.json().await?;
        Ok(body.reply)
    }
}
