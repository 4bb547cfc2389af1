//! Text-extraction collaborator client
//!
//! Turns free-form order text (pasted chat messages, transcribed phone calls)
//! into a [`DraftPrefill`] by calling a Gemini-style `generateContent` endpoint
//! with a response schema. The prefill is a convenience only: the resulting
//! draft still passes through normal validation before any order is created.

use std::time::Duration;

use serde_json::{Value, json};
use shared::order::DraftPrefill;

use crate::core::Config;

const SYSTEM_PROMPT: &str = "You extract order details from free-form text written by sales staff. \
Return only the fields you are confident about; omit anything uncertain. \
Dates are ISO (YYYY-MM-DD). delivery_shift is one of FIRST_TRIP, SECOND_TRIP, NIGHT. \
Quantities are positive integers.";

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Extraction API key is not configured")]
    MissingCredentials,
    #[error("Extraction request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Extraction response contained no candidate text")]
    EmptyResponse,
    #[error("Failed to parse extraction output: {0}")]
    Parse(String),
}

/// Client for the text-extraction collaborator
#[derive(Clone)]
pub struct ExtractionService {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl ExtractionService {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url: config.extract_api_url.clone(),
            api_key: config.extract_api_key.clone(),
        }
    }

    /// Extract a draft prefill from free-form order text
    pub async fn extract(&self, text: &str) -> Result<DraftPrefill, ExtractionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ExtractionError::MissingCredentials)?;

        let url = format!("{}?key={}", self.api_url, api_key);
        let body = request_body(text);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        let candidate = extract_candidate_text(&payload).ok_or(ExtractionError::EmptyResponse)?;

        serde_json::from_str(candidate).map_err(|e| ExtractionError::Parse(e.to_string()))
    }
}

fn request_body(text: &str) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_PROMPT }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": text }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "customer_name": { "type": "STRING" },
                    "area_location": { "type": "STRING" },
                    "receiving_date": { "type": "STRING" },
                    "delivery_shift": {
                        "type": "STRING",
                        "enum": ["FIRST_TRIP", "SECOND_TRIP", "NIGHT"]
                    },
                    "items": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "item_name": { "type": "STRING" },
                                "quantity": { "type": "INTEGER" }
                            },
                            "required": ["item_name", "quantity"]
                        }
                    },
                    "overall_notes": { "type": "STRING" }
                }
            }
        }
    })
}

/// Pull the first candidate's text out of a `generateContent` response
fn extract_candidate_text(payload: &Value) -> Option<&str> {
    payload
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_candidate_text() {
        let payload = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "{\"customer_name\":\"Cairo Mart\"}" }]
                }
            }]
        });
        assert_eq!(
            extract_candidate_text(&payload),
            Some("{\"customer_name\":\"Cairo Mart\"}")
        );
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        assert_eq!(extract_candidate_text(&json!({ "candidates": [] })), None);
        assert_eq!(extract_candidate_text(&json!({})), None);
    }

    #[test]
    fn test_blank_text_yields_none() {
        let payload = json!({
            "candidates": [{ "content": { "parts": [{ "text": "  " }] } }]
        });
        assert_eq!(extract_candidate_text(&payload), None);
    }

    #[test]
    fn test_candidate_parses_into_prefill() {
        let text = r#"{
            "customer_name": "Cairo Mart",
            "receiving_date": "2025-03-14",
            "items": [{ "item_name": "Rice 25kg", "quantity": 10 }]
        }"#;
        let prefill: DraftPrefill = serde_json::from_str(text).unwrap();
        assert_eq!(prefill.customer_name.as_deref(), Some("Cairo Mart"));
        assert_eq!(prefill.items.len(), 1);
        assert!(prefill.area_location.is_none());
    }
}
