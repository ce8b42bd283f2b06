// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("chatbot", %request_id);

    async move {
        // A body that is not `{ "message": string }` counts as no message.
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                debug!(%rejection, "rejected chat body");
                ChatRequest::default()
            }
        };

        let reply = state.relay.submit_message(request.message.as_deref()).await?;
        Ok::<_, AppError>(Json(ChatReply { reply }))
    }
    .instrument(span)
    .await
}
