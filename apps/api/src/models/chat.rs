use sqlx::FromRow;

/// One chat turn as persisted in `chat_history`.
#[derive(Debug, Clone, FromRow)]
pub struct ChatMessage {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
    /// Canonical program name the turn referred to, when one resolved.
    pub carrera_referencia: Option<String>,
}
