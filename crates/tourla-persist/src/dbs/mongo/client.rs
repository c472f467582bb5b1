use mongodb::{Client, bson::doc, bson::oid::ObjectId};
use async_trait::async_trait;
use chrono::Utc;

use crate::trait_client::PersistenceClient;
use crate::models::{ChatMessage, ChatSession, NewMessage, UserProfile};
use crate::dbs::mongo::models::{MongoMessage, MongoProfile};
use crate::dbs::mongo::repositories::{MongoMessageRepository, MongoProfileRepository, MongoSessionRepository};
use crate::error::{Result, PersistError};

pub struct MongoPersistenceClient {
    client: Client,
    database: String,
    session_repo: MongoSessionRepository,
    message_repo: MongoMessageRepository,
    profile_repo: MongoProfileRepository,
}

impl MongoPersistenceClient {
    /// Connect to MongoDB and create client
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let session_repo = MongoSessionRepository::new(&client, database);
        let message_repo = MongoMessageRepository::new(&client, database);
        let profile_repo = MongoProfileRepository::new(&client, database);

        Ok(Self {
            client,
            database: database.to_string(),
            session_repo,
            message_repo,
            profile_repo,
        })
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| PersistError::InvalidObjectId(e.to_string()))
}

#[async_trait]
impl PersistenceClient for MongoPersistenceClient {
    async fn create_session(&self, user_id: &str) -> Result<ChatSession> {
        let mongo_session = self.session_repo.create_session(user_id.to_string()).await?;
        Ok(mongo_session.into())
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<ChatSession>> {
        // Ids that are not ObjectIds cannot exist in this store.
        let Ok(object_id) = ObjectId::parse_str(session_id) else {
            return Ok(None);
        };

        let mongo_session = self.session_repo.get_session(object_id).await?;
        Ok(mongo_session.map(|s| s.into()))
    }

    async fn list_sessions(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<ChatSession>> {
        let mongo_sessions = self.session_repo.list_sessions(user_id, limit).await?;
        Ok(mongo_sessions.into_iter().map(|s| s.into()).collect())
    }

    async fn save_message(&self, message: NewMessage) -> Result<ChatMessage> {
        let session_id = parse_object_id(&message.session_id)?;

        if !self.session_repo.touch_session(session_id).await? {
            return Err(PersistError::SessionNotFound(message.session_id));
        }

        let mongo_message = MongoMessage {
            id: ObjectId::new(),
            session_id,
            user_id: message.user_id,
            sender_type: message.sender,
            content: message.content,
            metadata: message.metadata,
            created_at: Utc::now(),
        };

        self.message_repo.save_message(&mongo_message).await?;
        Ok(mongo_message.into())
    }

    async fn get_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>> {
        let object_id = parse_object_id(session_id)?;

        let mongo_messages = self.message_repo.get_messages(object_id).await?;
        Ok(mongo_messages.into_iter().map(|m| m.into()).collect())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let profile = self.profile_repo.get_profile(user_id).await?;
        Ok(profile.map(|p| p.into()))
    }

    async fn upsert_profile(&self, mut profile: UserProfile) -> Result<UserProfile> {
        profile.updated_at = Utc::now();
        let mongo_profile = MongoProfile::from(profile);
        self.profile_repo.upsert_profile(&mongo_profile).await?;
        Ok(mongo_profile.into())
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}
