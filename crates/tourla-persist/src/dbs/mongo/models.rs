use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::{ChatMessage, ChatSession, MessageMetadata, SenderKind, UserProfile};

/// MongoDB-specific session model (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoSession {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// MongoDB-specific message model (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoMessage {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub session_id: ObjectId,
    pub user_id: String,
    pub sender_type: SenderKind,
    pub content: String,
    #[serde(default)]
    pub metadata: MessageMetadata,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// MongoDB-specific profile model (`_id` is the user id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

// Conversions between database-agnostic and MongoDB-specific models

impl From<MongoSession> for ChatSession {
    fn from(session: MongoSession) -> Self {
        Self {
            id: session.id.to_hex(),
            user_id: session.user_id,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

impl From<MongoMessage> for ChatMessage {
    fn from(msg: MongoMessage) -> Self {
        Self {
            id: msg.id.to_hex(),
            session_id: msg.session_id.to_hex(),
            user_id: msg.user_id,
            sender: msg.sender_type,
            content: msg.content,
            metadata: msg.metadata,
            created_at: msg.created_at,
        }
    }
}

impl From<MongoProfile> for UserProfile {
    fn from(profile: MongoProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            avatar_url: profile.avatar_url,
            updated_at: profile.updated_at,
        }
    }
}

impl From<UserProfile> for MongoProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            avatar_url: profile.avatar_url,
            updated_at: profile.updated_at,
        }
    }
}
