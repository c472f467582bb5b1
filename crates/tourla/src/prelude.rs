//! Prelude module for convenient imports
//!
//! ```rust
//! use tourla::prelude::*;
//! ```

pub use crate::{
    Assistant, BotReply, Responder, ResponderBuilder, PlacesService, WeatherService,
    ChatClient, ClientFactory, ProviderConfig,
    PersistenceClient, InMemoryPersistenceClient, ChatMessage, ChatSession, NewMessage, UserProfile,
};
