use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::{Coordinates, Locality};
use crate::config::configured_key;
use crate::error::{Result, ServiceError};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
const STATIC_MAP_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";
const SEARCH_RADIUS_METERS: u32 = 5000;
const MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub location: Option<Coordinates>,
    pub photo_url: Option<String>,
}

#[derive(Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<RawPlace>,
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct RawPlace {
    name: String,
    #[serde(default)]
    formatted_address: String,
    rating: Option<f64>,
    geometry: Option<Geometry>,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct Photo {
    photo_reference: String,
}

/// Google Places text-search client
#[derive(Debug, Clone)]
pub struct PlacesService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl PlacesService {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: configured_key(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search `"<query> en <locality> Bogotá"` biased to the locality's
    /// coordinates. Returns at most five results; `ZERO_RESULTS` is an empty
    /// list and any other non-`OK` status is an error.
    pub async fn search(&self, query: &str, locality: &Locality) -> Result<Vec<PlaceResult>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ServiceError::NotConfigured("GOOGLE_MAPS_API_KEY"))?;

        let text = format!("{query} en {} Bogotá", locality.name);
        let location = format!("{},{}", locality.coordinates.lat, locality.coordinates.lng);
        let radius = SEARCH_RADIUS_METERS.to_string();
        let url = format!("{}/maps/api/place/textsearch/json", self.base_url);

        debug!(query = %text, "places text search");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", text.as_str()),
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: TextSearchResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;

        match body.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(Vec::new()),
            _ => {
                return Err(ServiceError::Upstream {
                    status: body.status,
                    message: body.error_message,
                })
            }
        }

        Ok(body
            .results
            .into_iter()
            .take(MAX_RESULTS)
            .map(|raw| PlaceResult {
                photo_url: raw
                    .photos
                    .first()
                    .map(|p| self.photo_url(&p.photo_reference, api_key)),
                name: raw.name,
                address: raw.formatted_address,
                rating: raw.rating,
                location: raw.geometry.map(|g| Coordinates {
                    lat: g.location.lat,
                    lng: g.location.lng,
                }),
            })
            .collect())
    }

    fn photo_url(&self, reference: &str, api_key: &str) -> String {
        format!(
            "{}/maps/api/place/photo?maxwidth=400&photoreference={reference}&key={api_key}",
            self.base_url
        )
    }

    /// Static map for the results; empty when the service has no key
    pub fn map_url(&self, center: Coordinates, places: &[PlaceResult]) -> String {
        let markers: Vec<Coordinates> = places.iter().filter_map(|p| p.location).collect();
        static_map_url(self.api_key.as_deref(), center, &markers)
    }
}

/// Google Static Maps URL: zoom 14, 400x300, one red marker per point
/// labeled 1..n. Empty string without a key.
pub fn static_map_url(api_key: Option<&str>, center: Coordinates, markers: &[Coordinates]) -> String {
    let Some(api_key) = configured_key(api_key.map(str::to_string)) else {
        return String::new();
    };

    let mut url = format!(
        "{STATIC_MAP_URL}?center={},{}&zoom=14&size=400x300",
        center.lat, center.lng
    );
    for (i, marker) in markers.iter().enumerate() {
        url.push_str(&format!(
            "&markers=color:red%7Clabel:{}%7C{},{}",
            i + 1,
            marker.lat,
            marker.lng
        ));
    }
    url.push_str("&key=");
    url.push_str(&api_key);
    url
}
