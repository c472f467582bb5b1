use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use tourla_bot::config::key_from_env;
use tourla_llm::ProviderType;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub mongodb: MongoDbConfig,
    pub llm: LlmConfig,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(skip)]
    pub secrets: Secrets,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    MongoDb,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoDbConfig {
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub provider: ProviderType,
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Credentials read from the environment. API keys that are blank or
/// left at a sample placeholder are `None`.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub mongodb_uri: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub google_maps_api_key: Option<String>,
    pub openweather_api_key: Option<String>,
}

impl Secrets {
    pub fn from_env() -> Self {
        Self {
            mongodb_uri: std::env::var("MONGODB_URI").ok().filter(|u| !u.trim().is_empty()),
            openai_api_key: key_from_env("OPENAI_API_KEY"),
            gemini_api_key: key_from_env("GEMINI_API_KEY"),
            google_maps_api_key: key_from_env("GOOGLE_MAPS_API_KEY"),
            openweather_api_key: key_from_env("OPENWEATHER_API_KEY"),
        }
    }

    /// Key for the configured assistant provider
    pub fn llm_api_key(&self, provider: ProviderType) -> Option<&str> {
        match provider {
            ProviderType::OpenAI => self.openai_api_key.as_deref(),
            ProviderType::Gemini => self.gemini_api_key.as_deref(),
        }
    }
}

fn prefixed(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .keep_prefix(true)
        .separator("_")
        .try_parsing(true)
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables (SERVER_, STORAGE_, MONGODB_, LLM_ prefixes; LOG_LEVEL, LOG_FORMAT)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(prefixed("SERVER"))
            .add_source(prefixed("STORAGE"))
            .add_source(prefixed("MONGODB"))
            .add_source(prefixed("LLM"))
            .set_override_option("logging.level", std::env::var("LOG_LEVEL").ok())?
            .set_override_option("logging.format", std::env::var("LOG_FORMAT").ok())?;

        let mut cfg: Config = builder.build()?.try_deserialize()?;
        cfg.secrets = Secrets::from_env();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));
        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::MongoDb && self.secrets.mongodb_uri.is_none() {
            return Err(ConfigError::Message(
                "MONGODB_URI environment variable is required when storage.backend = \"mongodb\""
                    .to_string(),
            ));
        }
        Ok(())
    }
}
