use crate::responder::Responder;
use crate::services::{Assistant, PlacesService, WeatherService};

/// Builder for a [`Responder`]; every augmentation service is optional and
/// defaults to degraded mode.
pub struct ResponderBuilder {
    weather: Option<WeatherService>,
    places: Option<PlacesService>,
    assistant: Option<Assistant>,
    restaurant_sample: usize,
}

impl ResponderBuilder {
    pub fn new() -> Self {
        Self {
            weather: None,
            places: None,
            assistant: None,
            restaurant_sample: Responder::DEFAULT_RESTAURANT_SAMPLE,
        }
    }

    pub fn weather(mut self, service: WeatherService) -> Self {
        self.weather = Some(service);
        self
    }

    pub fn places(mut self, service: PlacesService) -> Self {
        self.places = Some(service);
        self
    }

    pub fn assistant(mut self, assistant: Assistant) -> Self {
        self.assistant = Some(assistant);
        self
    }

    /// How many restaurants to pick from the static table
    pub fn restaurant_sample(mut self, size: usize) -> Self {
        self.restaurant_sample = size;
        self
    }

    pub fn build(self) -> Responder {
        Responder::new(
            self.weather.unwrap_or_else(|| WeatherService::new(None)),
            self.places.unwrap_or_else(|| PlacesService::new(None)),
            self.assistant.unwrap_or_default(),
            self.restaurant_sample,
        )
    }
}

impl Default for ResponderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
