use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::modules::chat::{
    relay::ChatRelay,
    schema::{ChatReply, ChatRequest},
};
use crate::modules::error::AppError;
use crate::AppState;

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(payload) = payload?;

    let relay = ChatRelay::new(
        state.llm.as_ref(),
        &state.settings.system_instruction,
        state.settings.provider_timeout,
    );

    let reply = relay.handle_chat(payload).await?;

    Ok(Json(reply))
}
