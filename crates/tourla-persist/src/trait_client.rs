use async_trait::async_trait;

use crate::models::{ChatMessage, ChatSession, NewMessage, UserProfile};
use crate::error::Result;

/// Trait for database persistence operations
///
/// Implementations provide database-specific CRUD operations. Messages are
/// append-only: once saved they are never updated or reordered.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Create a new chat session owned by `user_id`
    async fn create_session(&self, user_id: &str) -> Result<ChatSession>;

    /// Get a session by ID
    async fn get_session(&self, session_id: &str) -> Result<Option<ChatSession>>;

    /// List sessions for a user, most recently active first
    async fn list_sessions(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<ChatSession>>;

    /// Append a message to its session and return the stored record
    async fn save_message(&self, message: NewMessage) -> Result<ChatMessage>;

    /// Get all messages for a session in insertion order
    async fn get_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>>;

    /// Get a user's profile
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Insert or replace a user's profile
    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile>;

    /// Cheap round-trip used by the health check
    async fn ping(&self) -> Result<()>;
}
