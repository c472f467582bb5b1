use mongodb::{Client, Collection, bson::doc, bson::oid::ObjectId};
use futures::TryStreamExt;

use crate::dbs::mongo::models::MongoMessage;
use crate::error::Result;

#[derive(Clone)]
pub struct MongoMessageRepository {
    collection: Collection<MongoMessage>,
}

impl MongoMessageRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("messages");
        Self { collection }
    }

    /// Save a single message
    pub async fn save_message(&self, message: &MongoMessage) -> Result<ObjectId> {
        self.collection.insert_one(message).await?;
        Ok(message.id)
    }

    /// Get all messages for a session
    ///
    /// `_id` breaks ties between messages stored within the same millisecond;
    /// ObjectIds from one process are monotonically increasing.
    pub async fn get_messages(&self, session_id: ObjectId) -> Result<Vec<MongoMessage>> {
        let filter = doc! { "session_id": session_id };
        let messages = self.collection
            .find(filter)
            .sort(doc! { "created_at": 1, "_id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }
}
