// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ChatReply;
use crate::services::relay::RelayError;

pub const NO_MESSAGE_REPLY: &str = "No message provided.";
pub const PROVIDER_FAILURE_REPLY: &str = "Error connecting to AI.";

/// Errors surfaced at the HTTP boundary. Every variant renders as a
/// `{ "reply": ... }` body so the widget can show it like any other reply.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no message provided")]
    BadRequest,
    #[error("completion provider unavailable")]
    Upstream,
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::InvalidInput => AppError::BadRequest,
            RelayError::ProviderFailure => AppError::Upstream,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, reply) = match self {
            AppError::BadRequest => (StatusCode::BAD_REQUEST, NO_MESSAGE_REPLY),
            AppError::Upstream => (StatusCode::INTERNAL_SERVER_ERROR, PROVIDER_FAILURE_REPLY),
        };
        (status, Json(ChatReply::new(reply))).into_response()
    }
}
