use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{GenerationError, is_credential_marker};

/// One content-generation call: a model identifier, the prompt text, and an
/// optional JSON schema the response must match.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub response_schema: Option<Value>,
}

impl GenerationRequest {
    #[must_use]
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    #[must_use]
    pub fn structured(
        model: impl Into<String>,
        prompt: impl Into<String>,
        response_schema: Value,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: Some(response_schema),
        }
    }
}

/// Inline image payload as the API returns it: MIME type plus base64 data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// Seam between `ContentService` and the hosted generative API.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Run a structured-output request and return the raw response text.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` on transport failures, non-success
    /// statuses, or credential rejection.
    async fn generate_json(&self, request: GenerationRequest)
    -> Result<String, GenerationError>;

    /// Run an image request and return the first inline image payload.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::MissingImage` when the response carries no
    /// image part, or transport/status/credential errors as above.
    async fn generate_image(
        &self,
        request: GenerationRequest,
    ) -> Result<InlineImage, GenerationError>;
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
}

impl GeminiConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("THEORY_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("THEORY_AI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
        let text_model =
            env::var("THEORY_AI_MODEL").unwrap_or_else(|_| "gemini-3-pro-preview".into());
        let image_model =
            env::var("THEORY_AI_IMAGE_MODEL").unwrap_or_else(|_| "gemini-2.5-flash-image".into());
        Some(Self {
            base_url,
            api_key,
            text_model,
            image_model,
        })
    }
}

/// reqwest-backed client for the hosted generative API.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    config: GeminiConfig,
}

impl GeminiBackend {
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        GeminiConfig::from_env().map(Self::new)
    }

    #[must_use]
    pub fn text_model(&self) -> &str {
        &self.config.text_model
    }

    #[must_use]
    pub fn image_model(&self) -> &str {
        &self.config.image_model
    }

    async fn call(
        &self,
        request: &GenerationRequest,
        generation_config: Value,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            request.model,
        );
        let payload = json!({
            "contents": [{ "parts": [{ "text": request.prompt }] }],
            "generationConfig": generation_config,
        });

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body).unwrap_or(body);
            if is_credential_marker(&message) {
                return Err(GenerationError::CredentialRejected(message));
            }
            return Err(GenerationError::HttpStatus { status, message });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate_json(
        &self,
        request: GenerationRequest,
    ) -> Result<String, GenerationError> {
        let mut generation_config = json!({ "responseMimeType": "application/json" });
        if let Some(schema) = &request.response_schema {
            generation_config["responseSchema"] = schema.clone();
        }
        let body = self.call(&request, generation_config).await?;
        body.first_text().ok_or(GenerationError::EmptyResponse)
    }

    async fn generate_image(
        &self,
        request: GenerationRequest,
    ) -> Result<InlineImage, GenerationError> {
        let generation_config = json!({ "imageConfig": { "aspectRatio": "16:9" } });
        let body = self.call(&request, generation_config).await?;
        body.first_inline_image().ok_or(GenerationError::MissingImage)
    }
}

/// Backend used when no API key is configured; every call fails with
/// `Disabled` so the UI can show its unconfigured state.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledBackend;

#[async_trait]
impl GenerationBackend for DisabledBackend {
    async fn generate_json(
        &self,
        _request: GenerationRequest,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }

    async fn generate_image(
        &self,
        _request: GenerationRequest,
    ) -> Result<InlineImage, GenerationError> {
        Err(GenerationError::Disabled)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(rename = "inlineData", default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType", default)]
    mime_type: String,
    #[serde(default)]
    data: String,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
    }

    fn first_inline_image(self) -> Option<InlineImage> {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.inline_data)
            .map(|data| InlineImage {
                mime_type: data.mime_type,
                data: data.data,
            })
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(ToString::to_string)
}
