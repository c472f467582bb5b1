use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: HashMap<String, String>,
}

fn configured(present: bool) -> String {
    let status = if present { "configured" } else { "not_configured" };
    status.to_string()
}

/// Health check endpoint
///
/// Reports storage connectivity and which augmentation APIs have keys.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    let mut services = HashMap::new();

    let storage = match state.persist.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!("Storage ping failed: {}", e);
            "disconnected"
        }
    };
    services.insert("storage".to_string(), storage.to_string());

    let secrets = &state.config.secrets;
    services.insert("weather".to_string(), configured(secrets.openweather_api_key.is_some()));
    services.insert("places".to_string(), configured(secrets.google_maps_api_key.is_some()));
    services.insert(
        "assistant".to_string(),
        configured(state.responder.assistant().is_configured()),
    );

    let status = if storage == "connected" { "healthy" } else { "degraded" };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    }))
}
