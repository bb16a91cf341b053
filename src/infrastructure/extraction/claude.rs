//! Claude Messages API extractor adapter

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{ExtractionError, Extractor};
use crate::domain::category::Category;
use crate::domain::extraction::{
    ClarificationAnswer, ClarificationRequest, ExtractedItem, ExtractionResult, SystemPrompt,
};
use crate::domain::log::LogContent;

/// Claude model to use
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Anthropic API base URL
const API_BASE_URL: &str = "https://api.anthropic.com";

/// Required API version header
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Upper bound on the model's response; a full extraction result fits
/// comfortably under this
const MAX_TOKENS: u32 = 1024;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Request types for the Messages API

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

// Response types for the Messages API

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Option<Vec<ContentBlock>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

// Wire shape of the model's extraction output, before validation. All
// fields are loose on purpose: anything that fails validation degrades to
// the fallback item instead of erroring.

#[derive(Debug, Deserialize)]
struct WireResult {
    items: Option<Value>,
    needs_clarification: Option<WireClarification>,
}

#[derive(Debug, Deserialize)]
struct WireClarification {
    field: String,
    question: String,
}

#[derive(Debug, Deserialize)]
struct WireItem {
    category: String,
    subcategory: Option<String>,
    content: Value,
    confidence: f64,
    original_text: String,
}

/// Claude API extractor
pub struct ClaudeExtractor {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl ClaudeExtractor {
    /// Create a new extractor with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a new extractor with a custom model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the extractor at a different API host. Used by tests to target
    /// a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    /// Build the request body
    fn build_request(&self, prompt: &SystemPrompt) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            system: prompt.instruction().to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.user_message().to_string(),
            }],
        }
    }

    /// Extract text from response
    fn extract_text(response: &MessagesResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .content
            .as_ref()?
            .iter()
            .filter_map(|b| b.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }

    /// Cut the model's text down to the JSON object it contains. The model
    /// sometimes wraps its output in prose despite the instruction.
    fn find_json_object(text: &str) -> Option<&str> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&text[start..=end])
    }

    /// Parse and validate the model's output. Any shape violation yields
    /// the fallback result for the transcript; this function never fails.
    fn parse_extraction(text: &str, transcript: &str) -> ExtractionResult {
        let Some(json) = Self::find_json_object(text) else {
            return ExtractionResult::fallback(transcript);
        };

        let wire: WireResult = match serde_json::from_str(json) {
            Ok(wire) => wire,
            Err(_) => return ExtractionResult::fallback(transcript),
        };

        let items = match wire.items {
            Some(Value::Array(raw)) => {
                let mut items = Vec::with_capacity(raw.len());
                for value in raw {
                    match Self::validate_item(&value) {
                        Some(item) => items.push(item),
                        None => return ExtractionResult::fallback(transcript),
                    }
                }
                items
            }
            // Present but not an array: treat as empty rather than losing
            // a clarification question that may ride alongside
            Some(_) => Vec::new(),
            None => return ExtractionResult::fallback(transcript),
        };

        ExtractionResult {
            items,
            needs_clarification: wire.needs_clarification.map(|c| ClarificationRequest {
                field: c.field,
                question: c.question,
            }),
        }
    }

    fn validate_item(value: &Value) -> Option<ExtractedItem> {
        let wire: WireItem = serde_json::from_value(value.clone()).ok()?;

        let category = Category::from_str(&wire.category).ok()?;
        if !(0.0..=1.0).contains(&wire.confidence) {
            return None;
        }
        let content = LogContent::from_value(category, &wire.content).ok()?;

        Some(ExtractedItem {
            category,
            subcategory: wire.subcategory,
            content,
            confidence: wire.confidence,
            original_text: wire.original_text,
        })
    }
}

#[async_trait]
impl Extractor for ClaudeExtractor {
    async fn extract(
        &self,
        transcript: &str,
        clarification: Option<&ClarificationAnswer>,
    ) -> Result<ExtractionResult, ExtractionError> {
        if transcript.trim().is_empty() {
            return Err(ExtractionError::EmptyTranscript);
        }

        let prompt = SystemPrompt::build(transcript, clarification);
        let body = self.build_request(&prompt);

        let response = self
            .client
            .post(self.api_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ExtractionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ExtractionError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExtractionError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // From here on a response has arrived; anything unreadable in it
        // degrades to the fallback item so the utterance survives.
        let envelope: MessagesResponse = match response.json().await {
            Ok(envelope) => envelope,
            Err(_) => return Ok(ExtractionResult::fallback(transcript)),
        };

        if let Some(error) = envelope.error {
            return Err(ExtractionError::ApiError(error.message));
        }

        let text = match Self::extract_text(&envelope) {
            Some(text) => text,
            None => return Ok(ExtractionResult::fallback(transcript)),
        };

        Ok(Self::parse_extraction(&text, transcript))
    }
}
