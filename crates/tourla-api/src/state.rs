use std::sync::Arc;

use tourla_bot::{Assistant, PlacesService, Responder, WeatherService};
use tourla_llm::{ClientFactory, ProviderConfig};
use tourla_persist::PersistenceClient;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// The responder holds no per-conversation state; dialogue context is
/// rebuilt from stored messages on every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub persist: Arc<dyn PersistenceClient>,
    pub responder: Arc<Responder>,
}

impl AppState {
    pub fn new(config: Config, persist: Arc<dyn PersistenceClient>, responder: Responder) -> Self {
        Self {
            config: Arc::new(config),
            persist,
            responder: Arc::new(responder),
        }
    }
}

/// Wire the augmentation services from the configured keys. Missing keys
/// leave the matching service in degraded mode.
pub fn build_responder(config: &Config) -> anyhow::Result<Responder> {
    let secrets = &config.secrets;

    if secrets.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set; weather questions get a placeholder reply");
    }
    if secrets.google_maps_api_key.is_none() {
        tracing::warn!("GOOGLE_MAPS_API_KEY not set; restaurants come from the static table, mall search is disabled");
    }

    let mut builder = Responder::builder()
        .weather(WeatherService::new(secrets.openweather_api_key.clone()))
        .places(PlacesService::new(secrets.google_maps_api_key.clone()));

    let provider = config.llm.provider;
    match secrets.llm_api_key(provider) {
        Some(key) => {
            let client = ClientFactory::create_chat_client(ProviderConfig {
                provider,
                api_key: key.to_string(),
                base_url: None,
            })?;
            tracing::info!(provider = client.provider(), model = %config.llm.model, "Assistant enabled");
            builder = builder.assistant(
                Assistant::new(client, config.llm.model.as_str()).with_temperature(config.llm.temperature),
            );
        }
        None => {
            tracing::warn!(?provider, "No assistant API key; unrecognized messages get the fixed fallback");
        }
    }

    Ok(builder.build())
}
