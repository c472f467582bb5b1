use std::sync::Arc;

use tourla_llm::{ChatClient, ChatOptions, ChatRequest, Message};
use tourla_persist::{ChatMessage, SenderKind};
use tracing::debug;

use crate::error::{Result, ServiceError};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// How many earlier turns are sent along with the user's question
const HISTORY_WINDOW: usize = 10;

const SYSTEM_PROMPT: &str = "Eres TourlATabogo, un asistente turístico de Bogotá, Colombia. \
Responde siempre en español, de forma breve y amable. Recomienda lugares, \
restaurantes y actividades en las localidades de Bogotá. Si la pregunta no \
tiene relación con turismo en Bogotá, redirige la conversación con cortesía.";

/// Generative-AI fallback for input the rule matcher did not recognize.
#[derive(Clone)]
pub struct Assistant {
    client: Option<Arc<dyn ChatClient>>,
    model: String,
    options: ChatOptions,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("provider", &self.client.as_ref().map(|c| c.provider()))
            .field("model", &self.model)
            .field("options", &self.options)
            .finish()
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl Assistant {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client: Some(client),
            model: model.into(),
            options: ChatOptions::new().temperature(DEFAULT_TEMPERATURE),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            client: None,
            model: DEFAULT_MODEL.to_string(),
            options: ChatOptions::new().temperature(DEFAULT_TEMPERATURE),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options = self.options.temperature(temperature);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a bare prompt, no system prompt and no history
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        self.send(vec![Message::human(prompt)]).await
    }

    /// Answer `text` as the tourism assistant, with the recent conversation
    pub async fn answer(&self, text: &str, history: &[ChatMessage]) -> Result<String> {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        let mut messages = Vec::with_capacity(history.len() - start + 2);
        messages.push(Message::system(SYSTEM_PROMPT));
        messages.extend(history[start..].iter().map(|m| match m.sender {
            SenderKind::User => Message::human(m.content.as_str()),
            SenderKind::Bot => Message::ai(m.content.as_str()),
        }));
        messages.push(Message::human(text));
        self.send(messages).await
    }

    async fn send(&self, messages: Vec<Message>) -> Result<String> {
        let client = self
            .client
            .as_ref()
            .ok_or(ServiceError::NotConfigured("assistant API key"))?;

        debug!(provider = client.provider(), model = %self.model, turns = messages.len(), "assistant request");
        let request = ChatRequest::new(self.model.clone(), messages).with_options(self.options.clone());
        let response = client
            .chat(request)
            .await
            .map_err(|e| ServiceError::Assistant(e.to_string()))?;

        response
            .content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ServiceError::Decode("assistant returned no content".into()))
    }
}
