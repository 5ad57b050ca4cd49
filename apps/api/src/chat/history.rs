use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::chat::ChatMessage;

/// How many past turns are replayed into the prompt.
const HISTORY_LIMIT: i64 = 5;

/// Appends one turn to the session history.
pub async fn save_message(
    pool: &PgPool,
    session_id: &str,
    message: &ChatMessage,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO chat_history
            (session_id, role, content, carrera_referencia)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(session_id)
    .bind(&message.role)
    .bind(&message.content)
    .bind(&message.carrera_referencia)
    .execute(pool)
    .await?;

    Ok(())
}

/// The most recent turns for a session, newest first.
pub async fn recent_history(
    pool: &PgPool,
    session_id: &str,
) -> Result<Vec<ChatMessage>, AppError> {
    let messages: Vec<ChatMessage> = sqlx::query_as(
        r#"
        SELECT role, content, carrera_referencia
        FROM chat_history
        WHERE session_id = $1
        ORDER BY timestamp DESC
        LIMIT $2
        "#,
    )
    .bind(session_id)
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(messages)
}
