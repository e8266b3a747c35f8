//! OCR.space extractor (multipart form with a base64 data URI)

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Deserialize;
use wfm_common::{MarketError, Result};

use super::{split_item_lines, Extractor};

pub const OCR_SPACE_URL: &str = "https://api.ocr.space/parse/image";

/// Public demo key with limited throughput
pub const DEMO_API_KEY: &str = "helloworld";

const DEFAULT_PROCESSING_ERROR: &str =
    "The OCR service reported an error while processing the image.";

/// Either a single message or a list of messages
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorText {
    One(String),
    Many(Vec<String>),
}

impl ErrorText {
    fn joined(self) -> Option<String> {
        let text = match self {
            ErrorText::One(s) => s,
            ErrorText::Many(list) => list
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        };
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct ParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OcrSpaceResponse {
    #[serde(rename = "IsErroredOnProcessing", default)]
    is_errored_on_processing: bool,
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Option<Vec<ParsedResult>>,
    #[serde(rename = "ErrorMessage", default)]
    error_message: Option<ErrorText>,
    #[serde(rename = "ErrorDetails", default)]
    error_details: Option<ErrorText>,
}

pub struct OcrSpaceExtractor {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl OcrSpaceExtractor {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_url(api_key, OCR_SPACE_URL)
    }

    /// Point at a different endpoint (for testing with mock servers)
    pub fn with_url(api_key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url: url.into(),
        }
    }

    async fn request(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>> {
        let data_uri = format!("data:{};base64,{}", mime_type, STANDARD.encode(image));
        let form = reqwest::multipart::Form::new()
            .text("base64Image", data_uri)
            .text("language", "eng")
            .text("isOverlayRequired", "false")
            .text("scale", "true")
            .text("OCREngine", "2");

        let response = self
            .client
            .post(&self.url)
            .header("apikey", &self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketError::Extraction(format!(
                "OCR request failed: {} - {}",
                status, body
            )));
        }

        let data: OcrSpaceResponse = serde_json::from_str(&response.text().await?)?;

        if data.is_errored_on_processing {
            let message = data
                .error_message
                .and_then(ErrorText::joined)
                .or_else(|| data.error_details.and_then(ErrorText::joined))
                .unwrap_or_else(|| DEFAULT_PROCESSING_ERROR.to_string());
            return Err(MarketError::Extraction(message));
        }

        let combined = data
            .parsed_results
            .unwrap_or_default()
            .into_iter()
            .map(|r| r.parsed_text.unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(split_item_lines(&combined))
    }
}

#[async_trait]
impl Extractor for OcrSpaceExtractor {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<Vec<String>> {
        log::info!("Extracting item names via OCR.space ({} bytes)", image.len());

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
#[path = "ocr_space_tests.rs"]
mod tests;
