//! Turns one user message plus the session history into a bot reply.

use rand::seq::SliceRandom;
use serde::Serialize;
use tourla_persist::{ChatMessage, MessageMetadata, NewMessage, PlaceRef};
use tracing::{debug, warn};

use crate::builder::ResponderBuilder;
use crate::catalog::{self, Locality, Restaurant, DEFAULT_CITY};
use crate::context::ConversationContext;
use crate::format;
use crate::intent::{self, Topic};
use crate::services::{Assistant, PlacesService, WeatherService};

/// Reply text plus the attachments stored alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BotReply {
    pub content: String,
    pub metadata: MessageMetadata,
}

impl BotReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: MessageMetadata::default(),
        }
    }

    fn clarify(topic: Topic) -> Self {
        Self {
            content: format::clarify(topic),
            metadata: MessageMetadata {
                awaiting: Some(topic.as_key().to_string()),
                ..Default::default()
            },
        }
    }

    /// The reply as a bot message ready to be stored
    pub fn into_message(self, session_id: impl Into<String>, user_id: impl Into<String>) -> NewMessage {
        NewMessage::bot(session_id, user_id, self.content, self.metadata)
    }
}

/// The single reply generator.
///
/// Never fails: missing keys produce placeholder text, failed calls produce
/// a fixed apology, unknown localities an explicit "no data" message.
#[derive(Debug, Clone)]
pub struct Responder {
    weather: WeatherService,
    places: PlacesService,
    assistant: Assistant,
    restaurant_sample: usize,
}

impl Default for Responder {
    fn default() -> Self {
        ResponderBuilder::new().build()
    }
}

impl Responder {
    pub const DEFAULT_RESTAURANT_SAMPLE: usize = 2;

    pub(crate) fn new(
        weather: WeatherService,
        places: PlacesService,
        assistant: Assistant,
        restaurant_sample: usize,
    ) -> Self {
        Self {
            weather,
            places,
            assistant,
            restaurant_sample,
        }
    }

    pub fn builder() -> ResponderBuilder {
        ResponderBuilder::new()
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    /// Reply to `text` given the session's earlier messages (oldest first,
    /// not including `text` itself).
    pub async fn respond(&self, text: &str, history: &[ChatMessage]) -> BotReply {
        let intent = intent::extract(text);
        let context = ConversationContext::from_history(history);
        let topic = intent
            .topic
            .or_else(|| intent.locality.and(context.awaiting));

        debug!(
            topic = ?topic,
            locality = intent.locality.map(|l| l.key),
            awaiting = ?context.awaiting,
            "intent resolved"
        );

        match (topic, intent.locality) {
            (Some(Topic::Greeting(talk)), _) => BotReply::text(format::small_talk(talk)),
            (Some(Topic::Weather), locality) => self.weather(locality).await,
            (Some(topic), None) => BotReply::clarify(topic),
            (Some(Topic::Tourism) | None, Some(locality)) => self.tourist_spots(locality),
            (Some(Topic::Restaurant), Some(locality)) => self.restaurants(locality).await,
            (Some(Topic::Mall), Some(locality)) => self.malls(locality).await,
            (Some(Topic::Safety), Some(locality)) => self.safety(locality),
            (None, None) => self.fallback(text, history).await,
        }
    }

    fn tourist_spots(&self, locality: &Locality) -> BotReply {
        let spots = catalog::tourist_spots_in(locality.key);
        if spots.is_empty() {
            return BotReply::text(format::no_data(Topic::Tourism, locality));
        }
        let mut reply = BotReply::text(format::tourist_spots(locality, spots));
        if let [spot] = spots {
            reply.metadata.location = Some(PlaceRef {
                name: spot.name.to_string(),
                address: format::spot_address(spot),
            });
        }
        reply
    }

    async fn restaurants(&self, locality: &Locality) -> BotReply {
        if self.places.is_configured() {
            return self.search_places(Topic::Restaurant, "restaurantes", locality).await;
        }
        let picks = self.sample_restaurants(locality);
        if picks.is_empty() {
            return BotReply::text(format::no_data(Topic::Restaurant, locality));
        }
        BotReply::text(format::restaurants(locality, &picks))
    }

    fn sample_restaurants(&self, locality: &Locality) -> Vec<&'static Restaurant> {
        let all = catalog::restaurants_in(locality.key);
        all.choose_multiple(&mut rand::thread_rng(), self.restaurant_sample)
            .copied()
            .collect()
    }

    async fn malls(&self, locality: &Locality) -> BotReply {
        if !self.places.is_configured() {
            return BotReply::text(format::MAPS_NOT_CONFIGURED);
        }
        self.search_places(Topic::Mall, "centros comerciales", locality).await
    }

    async fn search_places(&self, topic: Topic, query: &str, locality: &Locality) -> BotReply {
        let results = match self.places.search(query, locality).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, locality = locality.key, "places search failed");
                return BotReply::text(format::PLACES_FAILED);
            }
        };
        if results.is_empty() {
            return BotReply::text(format::no_data(topic, locality));
        }

        let map = self.places.map_url(locality.coordinates, &results);
        let mut reply = BotReply::text(format::places(topic, locality, &results));
        reply.metadata.map = Some(map).filter(|m| !m.is_empty());
        reply.metadata.image = results.iter().find_map(|p| p.photo_url.clone());
        if let [place] = results.as_slice() {
            reply.metadata.location = Some(PlaceRef {
                name: place.name.clone(),
                address: place.address.clone(),
            });
        }
        reply
    }

    fn safety(&self, locality: &Locality) -> BotReply {
        match catalog::safety_notes_for(locality.key) {
            [] => BotReply::text(format::no_data(Topic::Safety, locality)),
            notes => BotReply::text(format::safety(locality, notes)),
        }
    }

    async fn weather(&self, locality: Option<&Locality>) -> BotReply {
        if !self.weather.is_configured() {
            return BotReply::text(format::WEATHER_NOT_CONFIGURED);
        }
        let (city, place) = locality.map_or((DEFAULT_CITY, "Bogotá"), |l| (l.city, l.name));
        match self.weather.current(city).await {
            Ok(report) => {
                let mut reply = BotReply::text(format::weather(place, &report));
                reply.metadata.image = Some(report.icon_url());
                reply
            }
            Err(e) => {
                warn!(error = %e, city, "weather lookup failed");
                BotReply::text(format::WEATHER_FAILED)
            }
        }
    }

    async fn fallback(&self, text: &str, history: &[ChatMessage]) -> BotReply {
        if !self.assistant.is_configured() {
            return BotReply::text(format::FALLBACK);
        }
        match self.assistant.answer(text, history).await {
            Ok(answer) => BotReply::text(answer),
            Err(e) => {
                warn!(error = %e, "assistant fallback failed");
                BotReply::text(format::ASSISTANT_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeting() {
        let reply = Responder::default().respond("Hola", &[]).await;
        assert!(reply.content.starts_with("¡Hola! Soy TourlATabogo."));
        assert!(reply.metadata.is_empty());
    }

    #[tokio::test]
    async fn test_clarification_records_awaiting_topic() {
        let reply = Responder::default().respond("quiero hacer turismo", &[]).await;
        assert_eq!(reply.content, format::clarify(Topic::Tourism));
        assert_eq!(reply.metadata.awaiting.as_deref(), Some("turismo"));
    }

    #[tokio::test]
    async fn test_single_spot_sets_location() {
        let reply = Responder::default().respond("turismo en Chapinero", &[]).await;
        let location = reply.metadata.location.unwrap();
        assert_eq!(location.name, "Parque de la 93");
        assert_eq!(location.address, "Calle 93. Parque con restaurantes y bares (Horario: Público)");
    }

    #[tokio::test]
    async fn test_restaurant_sample_without_places_key() {
        let responder = Responder::default();
        let reply = responder.respond("restaurantes en la candelaria", &[]).await;
        assert!(reply.content.starts_with("Te recomiendo estos restaurantes en La Candelaria:"));
        assert!(reply.content.contains("1. **"));
        assert!(reply.content.contains("2. **"));
        assert!(!reply.content.contains("3. **"));
    }

    #[test]
    fn test_sample_is_bounded_by_table_size() {
        let responder = Responder::builder().restaurant_sample(5).build();
        let chia = catalog::locality("chia").unwrap();
        assert_eq!(responder.sample_restaurants(chia).len(), 1);
    }

    #[test]
    fn test_into_message() {
        let reply = BotReply::text("hola");
        let message = reply.into_message("s1", "u1");
        assert_eq!(message.session_id, "s1");
        assert_eq!(message.sender, tourla_persist::SenderKind::Bot);
    }
}
