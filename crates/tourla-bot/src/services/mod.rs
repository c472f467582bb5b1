//! Outbound callers for the optional augmentation APIs.
//!
//! Each service is built with an optional key; a missing key puts it in
//! degraded mode instead of failing construction. All calls are single
//! attempt.

pub mod assistant;
pub mod places;
pub mod weather;

pub use assistant::Assistant;
pub use places::{static_map_url, PlaceResult, PlacesService};
pub use weather::{WeatherReport, WeatherService};
