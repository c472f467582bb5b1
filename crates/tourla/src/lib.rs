//! # TourlATabogo
//!
//! A Spanish-language chat guide for Bogotá. User messages are matched
//! against topic keywords and a locality table; answers come from
//! compiled-in tables (tourist spots, restaurants, safety notes) and, when
//! keys are configured, from weather, places and generative-AI APIs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tourla::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = InMemoryPersistenceClient::new();
//!     let responder = Responder::builder()
//!         .weather(WeatherService::new(std::env::var("OPENWEATHER_API_KEY").ok()))
//!         .build();
//!
//!     let session = store.create_session("user-1").await?;
//!     let history = store.get_messages(&session.id).await?;
//!     store.save_message(NewMessage::user(&session.id, "user-1", "turismo en chapinero")).await?;
//!
//!     let reply = responder.respond("turismo en chapinero", &history).await;
//!     println!("{}", reply.content);
//!     store.save_message(reply.into_message(&session.id, "user-1")).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`tourla-bot`**: normalizer, catalog, intent matcher, responder and API callers
//! - **`tourla-llm`**: provider-agnostic chat client (OpenAI, Gemini)
//! - **`tourla-persist`**: sessions, messages and profiles; in-memory or MongoDB
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use tourla_bot::{
    catalog, format, normalize, Assistant, BotReply, ConversationContext, Coordinates, Intent,
    Locality, PlaceResult, PlacesService, Responder, ResponderBuilder, ServiceError, SmallTalk,
    Topic, WeatherReport, WeatherService,
};

pub use tourla_llm::{
    ChatClient, ChatOptions, ChatRequest, ChatResponse, ClientFactory, GeminiClient, Message,
    OpenAIClient, ProviderConfig, ProviderType,
};

pub use tourla_persist::{
    ChatMessage, ChatSession, InMemoryPersistenceClient, MessageMetadata, NewMessage,
    PersistError, PersistenceClient, PlaceRef, SenderKind, UserProfile,
};

#[cfg(feature = "mongodb")]
pub use tourla_persist::MongoPersistenceClient;
