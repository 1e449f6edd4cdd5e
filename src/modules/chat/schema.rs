use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(
        required(message = "message is required"),
        length(min = 1, message = "message is required")
    )]
    pub message: Option<String>,
    pub history: Option<Vec<HistoryEntry>>,
}

/// A history entry exactly as the client sent it; checked before it becomes a `ChatTurn`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryEntry {
    pub role: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
}
