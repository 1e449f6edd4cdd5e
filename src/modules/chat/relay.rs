//! Stateless chat relay.
//!
//! Every request carries its full transcript. The relay rebuilds a provider session from it,
//! binds the fixed persona, sends the new message once, and forgets everything afterwards.

use std::time::Duration;
use validator::Validate;

use crate::modules::chat::schema::{ChatReply, ChatRequest, HistoryEntry};
use crate::modules::error::AppError;
use crate::services::llm::{ChatProvider, ChatSession, ChatTurn, LlmError, Role};

pub struct ChatRelay<'a> {
    provider: &'a dyn ChatProvider,
    system_instruction: &'a str,
    timeout: Duration,
}

impl<'a> ChatRelay<'a> {
    pub fn new(provider: &'a dyn ChatProvider, system_instruction: &'a str, timeout: Duration) -> Self {
        Self {
            provider,
            system_instruction,
            timeout,
        }
    }

    pub async fn handle_chat(&self, request: ChatRequest) -> Result<ChatReply, AppError> {
        request.validate()?;

        let message = request.message.unwrap_or_default();
        let history = reconstruct_history(request.history.unwrap_or_default())?;

        tracing::debug!(turns = history.len(), "Relaying chat message");

        let session = ChatSession::new(self.system_instruction, history);
        let text = tokio::time::timeout(self.timeout, self.provider.send_message(&session, &message))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))??;

        Ok(ChatReply { text })
    }
}

/// Projects client history onto provider turns, keeping order, roles and text untouched.
pub fn reconstruct_history(entries: Vec<HistoryEntry>) -> Result<Vec<ChatTurn>, AppError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let role = match entry.role.as_deref() {
                Some(role) => Role::parse(role).ok_or_else(|| {
                    AppError::Validation(format!("history[{}] has an unrecognized role", index))
                })?,
                None => {
                    return Err(AppError::Validation(format!("history[{}] is missing a role", index)))
                }
            };
            let text = entry
                .text
                .ok_or_else(|| AppError::Validation(format!("history[{}] is missing text", index)))?;

            Ok(ChatTurn { role, text })
        })
        .collect()
}
