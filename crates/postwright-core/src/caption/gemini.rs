//! Gemini caption provider using the `generateContent` API.
//!
//! Sends the rendered prompt and the base64 image as two parts of a single
//! user turn, and returns `candidates[0].content.parts[0].text`.

use super::provider::{CaptionProvider, CaptionRequest};
use crate::error::{CaptionError, ConfigError};
use crate::http::client_with_timeout;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Gemini provider for caption generation.
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a provider against `endpoint` (e.g. `https://generativelanguage.googleapis.com/v1beta`).
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = client_with_timeout(timeout)?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            timeout,
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn map_send_error(&self, e: reqwest::Error) -> CaptionError {
        if e.is_timeout() {
            CaptionError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            // The URL carries the API key as a query parameter
            CaptionError::Transport {
                message: e.without_url().to_string(),
            }
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn first_candidate_text(body: &str) -> Result<String, CaptionError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| CaptionError::InvalidResponse {
            message: format!("failed to parse response: {e}"),
        })?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| CaptionError::InvalidResponse {
            message: format!("no candidate text in response: {body}"),
        })
}

#[async_trait]
impl CaptionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &CaptionRequest) -> Result<String, CaptionError> {
        let start = Instant::now();

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: request.prompt_text().to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: request.image().mime_type.clone(),
                            data: request.image().data.clone(),
                        },
                    },
                ],
            }],
        };

        let resp = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.map_send_error(e))?;

        if status != StatusCode::OK {
            tracing::debug!("Gemini error body: {text}");
            return Err(CaptionError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let caption = first_candidate_text(&text)?;
        tracing::debug!(
            model = %self.model,
            latency_ms = start.elapsed().as_millis() as u64,
            "Gemini caption received"
        );
        Ok(caption)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
