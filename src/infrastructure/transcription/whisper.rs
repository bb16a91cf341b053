//! OpenAI Whisper transcriber adapter

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{Transcriber, Transcript, TranscriptionError};
use crate::domain::audio::AudioClip;

/// Whisper API model to use
const MODEL: &str = "whisper-1";

/// OpenAI API base URL
const API_BASE_URL: &str = "https://api.openai.com";

/// Default spoken language hint
const DEFAULT_LANGUAGE: &str = "nl";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// OpenAI Whisper API transcriber
pub struct WhisperTranscriber {
    api_key: String,
    language: String,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl WhisperTranscriber {
    /// Create a new transcriber with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_language(api_key, DEFAULT_LANGUAGE)
    }

    /// Create a new transcriber with a custom language hint
    pub fn with_language(api_key: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            language: language.into(),
            base_url: API_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Point the transcriber at a different API host. Used by tests to
    /// target a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout. Used by tests.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_url(&self) -> String {
        format!("{}/v1/audio/transcriptions", self.base_url)
    }

    fn build_form(&self, clip: &AudioClip) -> Result<reqwest::multipart::Form, TranscriptionError> {
        let file = reqwest::multipart::Part::bytes(clip.data().to_vec())
            .file_name(format!("recording.{}", clip.mime_type().extension()))
            .mime_str(clip.mime_type().as_str())
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        Ok(reqwest::multipart::Form::new()
            .part("file", file)
            .text("model", MODEL)
            .text("language", self.language.clone()))
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, clip: &AudioClip) -> Result<Transcript, TranscriptionError> {
        let form = self.build_form(clip)?;
        let started = Instant::now();

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranscriptionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptionError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranscriptionError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))?;

        let text = response.text.trim().to_string();
        if text.is_empty() {
            return Err(TranscriptionError::EmptyResponse);
        }

        Ok(Transcript {
            text,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}
