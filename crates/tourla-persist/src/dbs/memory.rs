use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{PersistError, Result};
use crate::models::{ChatMessage, ChatSession, NewMessage, UserProfile};
use crate::trait_client::PersistenceClient;

/// Process-local store used for development and tests
///
/// Messages live in one `Vec` per session, so listing order is insertion order.
#[derive(Default)]
pub struct InMemoryPersistenceClient {
    sessions: RwLock<HashMap<String, ChatSession>>,
    messages: RwLock<HashMap<String, Vec<ChatMessage>>>,
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryPersistenceClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceClient for InMemoryPersistenceClient {
    async fn create_session(&self, user_id: &str) -> Result<ChatSession> {
        let now = Utc::now();
        let session = ChatSession {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        self.messages
            .write()
            .await
            .insert(session.id.clone(), Vec::new());

        tracing::debug!(session_id = %session.id, user_id, "session created");
        Ok(session)
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<ChatSession>> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn list_sessions(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<ChatSession>> {
        let mut sessions: Vec<ChatSession> = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();

        sessions.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        if let Some(limit) = limit {
            sessions.truncate(usize::try_from(limit).unwrap_or(0));
        }
        Ok(sessions)
    }

    async fn save_message(&self, message: NewMessage) -> Result<ChatMessage> {
        let now = Utc::now();

        {
            let mut sessions = self.sessions.write().await;
            let session = sessions
                .get_mut(&message.session_id)
                .ok_or_else(|| PersistError::SessionNotFound(message.session_id.clone()))?;
            session.updated_at = now;
        }

        let stored = message.into_message(uuid::Uuid::new_v4().to_string(), now);
        self.messages
            .write()
            .await
            .entry(stored.session_id.clone())
            .or_default()
            .push(stored.clone());

        Ok(stored)
    }

    async fn get_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>> {
        Ok(self
            .messages
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn upsert_profile(&self, mut profile: UserProfile) -> Result<UserProfile> {
        profile.updated_at = Utc::now();
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
