use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use tourla_persist::{ChatMessage, MessageMetadata, NewMessage, SenderKind};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message_id: String,
    pub session_id: String,
    pub user_id: String,
    /// "user" or "bot"
    #[schema(value_type = String)]
    pub sender: SenderKind,
    pub content: String,
    /// Optional image / map / location / awaiting
    #[schema(value_type = Object)]
    pub metadata: MessageMetadata,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ChatMessage> for MessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            message_id: message.id,
            session_id: message.session_id,
            user_id: message.user_id,
            sender: message.sender,
            content: message.content,
            metadata: message.metadata,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMessagesQuery {
    /// Most recent N messages, returned oldest first (default 50, max 100)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListMessagesResponse {
    pub messages: Vec<MessageResponse>,
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub user_id: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageResponse {
    pub user_message: MessageResponse,
    pub bot_message: MessageResponse,
}

async fn ensure_session(state: &AppState, session_id: &str) -> ApiResult<()> {
    match state.persist.get_session(session_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::SessionNotFound(session_id.to_string())),
    }
}

/// List messages in a session
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/messages",
    params(
        ("session_id" = String, Path, description = "Session ID"),
        ListMessagesQuery
    ),
    responses(
        (status = 200, description = "Messages in insertion order", body = ListMessagesResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Query(query): Query<ListMessagesQuery>,
) -> ApiResult<Json<ListMessagesResponse>> {
    ensure_session(&state, &session_id).await?;

    let limit = query.limit.clamp(1, 100) as usize;
    let mut messages = state.persist.get_messages(&session_id).await?;

    let has_more = messages.len() > limit;
    if has_more {
        let skip = messages.len() - limit;
        messages.drain(..skip);
    }

    Ok(Json(ListMessagesResponse {
        messages: messages.into_iter().map(MessageResponse::from).collect(),
        has_more,
    }))
}

/// Send a message and get the bot's reply
///
/// Stores the user message, generates the reply from the session history,
/// stores the reply, and returns both.
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/messages",
    params(
        ("session_id" = String, Path, description = "Session ID")
    ),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Stored user message and bot reply", body = SendMessageResponse),
        (status = 400, description = "Empty message"),
        (status = 404, description = "Session not found")
    ),
    tag = "messages"
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<Json<SendMessageResponse>> {
    let content = req.content.trim();
    if content.is_empty() {
        return Err(ApiError::BadRequest("Message content is required".to_string()));
    }
    ensure_session(&state, &session_id).await?;

    let history = state.persist.get_messages(&session_id).await?;

    let user_message = state
        .persist
        .save_message(NewMessage::user(&session_id, &req.user_id, content))
        .await?;

    let reply = state.responder.respond(content, &history).await;

    let bot_message = state
        .persist
        .save_message(reply.into_message(&session_id, &req.user_id))
        .await?;

    tracing::debug!(session_id = %session_id, history = history.len(), "Reply stored");

    Ok(Json(SendMessageResponse {
        user_message: user_message.into(),
        bot_message: bot_message.into(),
    }))
}
