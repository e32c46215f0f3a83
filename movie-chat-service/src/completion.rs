use anyhow::{Result, anyhow};
use serde_json::{Value, json};
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const COMPLETION_MODEL: &str = "llama-3.1-8b-instant";
const COMPLETION_TEMPERATURE: f64 = 0.4;

/// Client for the LLM's OpenAI-compatible chat-completions endpoint.
///
/// One call per chat request: an ordered list of role-tagged messages in,
/// a single completion string out. The endpoint URL is fixed at
/// construction; tests point it at a local mock.
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl CompletionClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_url(api_key, DEFAULT_API_URL)
    }

    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    pub async fn complete(&self, messages: Vec<Value>) -> Result<String> {
        debug!(message_count = messages.len(), "requesting completion");

        let payload = json!({
            "model": COMPLETION_MODEL,
            "messages": messages,
            "temperature": COMPLETION_TEMPERATURE,
        });

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("LLM API request failed: {}", response.status()));
        }

        let response_json: Value = response.json().await?;

        let content = response_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("Invalid response format from LLM"))?;

        Ok(content.to_string())
    }
}
