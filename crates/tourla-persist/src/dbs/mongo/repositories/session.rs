use mongodb::{Client, Collection, bson::doc, bson::oid::ObjectId};
use futures::TryStreamExt;
use chrono::Utc;

use crate::dbs::mongo::models::MongoSession;
use crate::error::Result;

#[derive(Clone)]
pub struct MongoSessionRepository {
    collection: Collection<MongoSession>,
}

impl MongoSessionRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("chat_sessions");
        Self { collection }
    }

    /// Create a new session
    pub async fn create_session(&self, user_id: String) -> Result<MongoSession> {
        let now = Utc::now();
        let session = MongoSession {
            id: ObjectId::new(),
            user_id,
            created_at: now,
            updated_at: now,
        };

        self.collection.insert_one(&session).await?;
        Ok(session)
    }

    /// Get session by ID
    pub async fn get_session(&self, session_id: ObjectId) -> Result<Option<MongoSession>> {
        let filter = doc! { "_id": session_id };
        Ok(self.collection.find_one(filter).await?)
    }

    /// List sessions for a user
    pub async fn list_sessions(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<MongoSession>> {
        let filter = doc! { "user_id": user_id };
        let mut find_opts = self.collection
            .find(filter)
            .sort(doc! { "updated_at": -1, "created_at": -1 });

        if let Some(limit) = limit {
            find_opts = find_opts.limit(limit);
        }

        let sessions = find_opts
            .await?
            .try_collect()
            .await?;
        Ok(sessions)
    }

    /// Touch session (update updated_at); returns false when no session matched
    pub async fn touch_session(&self, session_id: ObjectId) -> Result<bool> {
        let filter = doc! { "_id": session_id };
        let update = doc! { "$set": { "updated_at": bson::DateTime::now() } };
        let result = self.collection.update_one(filter, update).await?;
        Ok(result.matched_count > 0)
    }
}
