//! Rule-based Bogotá tourism chat bot.
//!
//! The [`Responder`] matches a message against fixed topic keywords and a
//! locality alias table, answers from compiled-in tables, and optionally
//! augments answers with weather, places and generative-AI calls.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod intent;
pub mod normalize;
pub mod responder;
pub mod services;

pub use builder::ResponderBuilder;
pub use catalog::{Coordinates, Locality};
pub use context::ConversationContext;
pub use error::ServiceError;
pub use intent::{Intent, SmallTalk, Topic};
pub use normalize::normalize;
pub use responder::{BotReply, Responder};
pub use services::{Assistant, PlaceResult, PlacesService, WeatherReport, WeatherService};
