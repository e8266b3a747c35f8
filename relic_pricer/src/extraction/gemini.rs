//! Gemini vision extractor (generateContent with inline image data)

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use wfm_common::{MarketError, Result};

use super::{split_item_lines, Extractor};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const PROMPT: &str = "\
You are an expert OCR system specializing in the video game Warframe.
Analyze this screenshot of a Warframe relic reward screen.
Extract the exact names of the prime parts and Forma blueprints listed as rewards.
List each item name on a new line.
Do not include any other text, numbers, or explanations. Only provide the list of item names.
For example, if you see \"Vasto Prime Barrel\", \"Akstiletto Prime Link\", and \"Forma Blueprint\", your output should be:
Vasto Prime Barrel
Akstiletto Prime Link
Forma Blueprint";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

pub struct GeminiExtractor {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiExtractor {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, GEMINI_BASE_URL)
    }

    /// Point at a different endpoint (for testing with mock servers)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn request(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [
                { "inlineData": { "mimeType": mime_type, "data": STANDARD.encode(image) } },
                { "text": PROMPT }
            ]}],
            // Plain transcription, no reasoning needed
            "generationConfig": { "thinkingConfig": { "thinkingBudget": 0 } }
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketError::Extraction(format!(
                "Gemini request failed: {} - {}",
                status, body
            )));
        }

        let data: GenerateResponse = serde_json::from_str(&response.text().await?)?;
        Ok(split_item_lines(&data.text()))
    }
}

#[async_trait]
impl Extractor for GeminiExtractor {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>> {
        log::info!("Extracting item names via Gemini {} ({} bytes)", self.model, image.len());

        self.request(image, mime_type).await.map_err(|e| {
            log::error!("Error extracting text from image: {}", e);
            match e {
                MarketError::Extraction(_) => e,
                other => MarketError::Extraction(other.to_string()),
            }
        })
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod tests;
