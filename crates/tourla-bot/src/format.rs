//! Fixed Spanish reply strings and list formatting.

use crate::catalog::{Locality, Restaurant, TouristSpot};
use crate::intent::{SmallTalk, Topic};
use crate::services::{PlaceResult, WeatherReport};

pub const WELCOME: &str =
    "Hola, soy tourlATabogo y te ayudaré a encontrar experiencias únicas en la ciudad.";

pub const FALLBACK: &str = "No te entendí. Por ahora, puedo darte información de lugares turísticos en las localidades de Bogotá. Intenta preguntando, por ejemplo, \"turismo en chapinero\".";

pub const MAPS_NOT_CONFIGURED: &str = "Esta función requiere una clave de API de Google Maps. Cuando la configures y actives la facturación en Google Cloud, podré buscar lugares en tiempo real.";

pub const WEATHER_NOT_CONFIGURED: &str = "Para darte el pronóstico del clima, necesito una clave de API de OpenWeather. Cuando la configures, esta función se activará.";

pub const ASSISTANT_NOT_CONFIGURED: &str = "Lo siento, el asistente de IA no está configurado.";

pub const ASSISTANT_FAILED: &str =
    "Lo siento, no pude obtener una respuesta del asistente en este momento.";

pub const WEATHER_FAILED: &str =
    "Lo siento, no pude consultar el clima en este momento. Intenta de nuevo más tarde.";

pub const PLACES_FAILED: &str =
    "Lo siento, no pude buscar lugares en este momento. Intenta de nuevo más tarde.";

pub fn small_talk(talk: SmallTalk) -> &'static str {
    match talk {
        SmallTalk::Hello => "¡Hola! Soy TourlATabogo. Puedo darte recomendaciones de lugares turísticos. ¿Sobre qué zona de Bogotá te gustaría saber?",
        SmallTalk::HowAreYou => "¡Muy bien! Listo para mostrarte lo mejor de Bogotá, basado en la información que tenemos.",
        SmallTalk::Thanks => "¡De nada! Si necesitas más recomendaciones, no dudes en preguntar.",
        SmallTalk::Goodbye => "¡Que tengas un gran día explorando Bogotá!",
        SmallTalk::Help => "Puedo recomendarte lugares turísticos, restaurantes, centros comerciales, consejos de seguridad y el clima en las localidades de Bogotá. Intenta, por ejemplo, \"restaurantes en la candelaria\".",
    }
}

/// What a topic is about, as used inside a sentence
fn subject(topic: Topic) -> &'static str {
    match topic {
        Topic::Restaurant => "restaurantes",
        Topic::Mall => "centros comerciales",
        Topic::Safety => "recomendaciones de seguridad",
        Topic::Weather => "el clima",
        Topic::Tourism | Topic::Greeting(_) => "lugares turísticos",
    }
}

pub fn clarify(topic: Topic) -> String {
    format!(
        "¡Claro! ¿En qué localidad o barrio de Bogotá te gustaría conocer {}?",
        subject(topic)
    )
}

pub fn no_data(topic: Topic, locality: &Locality) -> String {
    format!(
        "Lo siento, no tengo información de {} para {} en mi base de datos.",
        subject(topic),
        locality.name
    )
}

/// "Carrera 6 #15-88. Museo de piezas precolombinas (Horario: Mar-Dom)"
pub fn spot_address(spot: &TouristSpot) -> String {
    format!("{}. {} (Horario: {})", spot.address, spot.description, spot.hours)
}

pub fn tourist_spots(locality: &Locality, spots: &[TouristSpot]) -> String {
    let mut out = format!(
        "¡Claro! Según mi base de datos, aquí tienes algunos lugares recomendados en {}:\n\n",
        locality.name
    );
    for (i, spot) in spots.iter().enumerate() {
        out.push_str(&format!("{}. **{}**: {}\n", i + 1, spot.name, spot_address(spot)));
    }
    out
}

pub fn restaurants(locality: &Locality, picks: &[&Restaurant]) -> String {
    let mut out = format!("Te recomiendo estos restaurantes en {}:\n\n", locality.name);
    for (i, r) in picks.iter().enumerate() {
        out.push_str(&format!("{}. **{}** ({}): {}\n", i + 1, r.name, r.kind, r.description));
    }
    out
}

pub fn places(topic: Topic, locality: &Locality, results: &[PlaceResult]) -> String {
    let mut out = format!("Encontré estos {} en {}:\n\n", subject(topic), locality.name);
    for (i, place) in results.iter().enumerate() {
        out.push_str(&format!("{}. **{}**: {}", i + 1, place.name, place.address));
        if let Some(rating) = place.rating {
            out.push_str(&format!(" (⭐ {rating:.1})"));
        }
        out.push('\n');
    }
    out
}

pub fn safety(locality: &Locality, notes: &[&str]) -> String {
    let mut out = format!("Recomendaciones de seguridad para {}:\n\n", locality.name);
    for (i, note) in notes.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, note));
    }
    out
}

pub fn weather(place: &str, report: &WeatherReport) -> String {
    format!(
        "El clima actual en {place}: {:.0}°C, {}.",
        report.temperature,
        report.description.to_lowercase()
    )
}
