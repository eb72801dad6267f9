//! Local LLM Q&A bridge (Ollama chat API).
//!
//! Forwards a user question plus a CSV excerpt of the fee dataset to a local
//! chat-completion endpoint. Any failure collapses to a single fixed
//! user-facing message; the feature is hidden entirely in hosted contexts
//! (see the router).

use crate::config::Config;
use crate::domain::FeeRecord;
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

pub const UNAVAILABLE_MESSAGE: &str = "Local model not available. Ensure Ollama is running.";

/// How many fee rows the prompt excerpt carries.
const EXCERPT_ROWS: usize = 20;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat response missing message content")]
    MalformedReply,
    #[error("failed to serialize data excerpt")]
    Excerpt,
}

/// Client for the Ollama `/api/chat` endpoint with a fixed model.
#[derive(Debug, Clone)]
pub struct Assistant {
    client: Client,
    base_url: String,
    model: String,
}

impl Assistant {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.ollama_url.clone(),
            model: config.ollama_model.clone(),
        }
    }

    /// Answer a question using only the supplied fee rows as context.
    pub async fn ask(&self, question: &str, fees: &[FeeRecord]) -> Result<String, AssistantError> {
        let excerpt = csv_excerpt(fees)?;
        let prompt = build_prompt(question, &excerpt);

        let payload = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "stream": false
        });

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let reply: Value = response.json().await?;
        reply
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(AssistantError::MalformedReply)
    }
}

fn build_prompt(question: &str, excerpt: &str) -> String {
    format!(
        "You are a DeFi analyst.\nAnswer ONLY using the data below.\n\nDATA:\n{}\n\nQUESTION:\n{}\n",
        excerpt, question
    )
}

fn csv_excerpt(fees: &[FeeRecord]) -> Result<String, AssistantError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in fees.iter().take(EXCERPT_ROWS) {
        writer.serialize(row).map_err(|_| AssistantError::Excerpt)?;
    }
    let bytes = writer.into_inner().map_err(|_| AssistantError::Excerpt)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
