use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Database-agnostic chat session model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
