use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Database-agnostic message model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub user_id: String,
    pub sender: SenderKind,
    pub content: String,
    #[serde(default)]
    pub metadata: MessageMetadata,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderKind {
    User,
    Bot,
}

/// Optional attachments shown next to a message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PlaceRef>,
    /// Topic key of the clarifying question asked in this message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awaiting: Option<String>,
}

impl MessageMetadata {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.map.is_none() && self.location.is_none() && self.awaiting.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRef {
    pub name: String,
    pub address: String,
}

/// A message before the store has assigned its id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub session_id: String,
    pub user_id: String,
    pub sender: SenderKind,
    pub content: String,
    pub metadata: MessageMetadata,
}

impl NewMessage {
    pub fn user(session_id: impl Into<String>, user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            user_id: user_id.into(),
            sender: SenderKind::User,
            content: content.into(),
            metadata: MessageMetadata::default(),
        }
    }

    pub fn bot(
        session_id: impl Into<String>,
        user_id: impl Into<String>,
        content: impl Into<String>,
        metadata: MessageMetadata,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            user_id: user_id.into(),
            sender: SenderKind::Bot,
            content: content.into(),
            metadata,
        }
    }

    pub(crate) fn into_message(self, id: String, created_at: DateTime<Utc>) -> ChatMessage {
        ChatMessage {
            id,
            session_id: self.session_id,
            user_id: self.user_id,
            sender: self.sender,
            content: self.content,
            metadata: self.metadata,
            created_at,
        }
    }
}
