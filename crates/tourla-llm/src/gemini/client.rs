// Gemini (Google Generative Language API) client implementation

use crate::traits::{ChatClient, ChatOptions, ChatRequest, ChatResponse, TokenUsage};
use crate::types::Message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Gemini client for `models/{model}:generateContent`
///
/// The API key travels as a query parameter, as the public endpoint expects.
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// System messages go to `systemInstruction`; the rest become `contents`
    /// with Gemini's `user` / `model` roles.
    fn build_request(&self, messages: &[Message], options: &ChatOptions) -> Value {
        let system_text: Vec<&str> = messages
            .iter()
            .filter(|m| matches!(m, Message::System { .. }))
            .map(Message::text)
            .collect();

        let contents: Vec<Value> = messages
            .iter()
            .filter_map(|msg| {
                let role = match msg {
                    Message::System { .. } => return None,
                    Message::Human { .. } => "user",
                    Message::AI { .. } => "model",
                };
                Some(serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.text() }],
                }))
            })
            .collect();

        let safety_settings: Vec<Value> = SAFETY_CATEGORIES
            .iter()
            .map(|category| serde_json::json!({ "category": category, "threshold": "BLOCK_NONE" }))
            .collect();

        let mut obj = Map::new();
        obj.insert("contents".to_string(), Value::Array(contents));
        obj.insert("safety_settings".to_string(), Value::Array(safety_settings));

        if !system_text.is_empty() {
            obj.insert(
                "systemInstruction".to_string(),
                serde_json::json!({ "parts": [{ "text": system_text.join("\n") }] }),
            );
        }

        let mut generation = Map::new();
        if let Some(temp) = options.temperature {
            generation.insert("temperature".to_string(), serde_json::json!(temp));
        }
        if let Some(max_tokens) = options.max_tokens {
            generation.insert("maxOutputTokens".to_string(), serde_json::json!(max_tokens));
        }
        if !generation.is_empty() {
            obj.insert("generationConfig".to_string(), Value::Object(generation));
        }

        Value::Object(obj)
    }
}

#[async_trait]
impl ChatClient for GeminiClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let payload = self.build_request(&request.messages, &request.options);
        tracing::debug!(model = %request.model, messages = request.messages.len(), "Sending chat request");

        let response = self
            .http_client
            .post(format!("{}/models/{}:generateContent", self.base_url, request.model))
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }

        let raw: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse response")?;

        let candidate = raw
            .candidates
            .first()
            .context("Gemini returned an invalid or empty response")?;

        let text = candidate
            .content
            .as_ref()
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .map(|t| t.trim().to_string());

        Ok(ChatResponse {
            content: text,
            usage: raw.usage_metadata.as_ref().map(|u| TokenUsage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
            finish_reason: candidate.finish_reason.clone(),
            raw: serde_json::to_value(&raw)?,
        })
    }

    fn provider(&self) -> &'static str {
        "gemini"
    }
}

// ============================================================================
// GEMINI-SPECIFIC RESPONSE TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}
