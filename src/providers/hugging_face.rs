use log::{error, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::TranslationModel;

/// Client for a hosted pretrained translation model
///
/// Speaks the Hugging Face inference protocol: one POST per input string to
/// `{base_url}/models/{model_id}`, truncation handled server-side by the
/// model's tokenizer, decoded text returned in the response body. One
/// client instance is bound to one model, so the facade holds two of these
/// (one per direction).
#[derive(Debug, Clone)]
pub struct HuggingFace {
    /// Base URL of the inference API
    base_url: String,
    /// Model repository id, e.g. "Helsinki-NLP/opus-mt-en-zh"
    model_id: String,
    /// Bearer token, may be empty for anonymous access
    api_key: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

/// Inference request body
#[derive(Debug, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// The text to run the model over
    inputs: String,
    /// Tokenizer and generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<InferenceParameters>,
    /// API-level options
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<InferenceOptions>,
}

/// Tokenizer and generation parameters
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InferenceParameters {
    /// Truncate inputs longer than the model's maximum length
    #[serde(skip_serializing_if = "Option::is_none")]
    truncation: Option<bool>,
    /// Maximum length of the generated output in tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u32>,
}

/// API-level request options
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InferenceOptions {
    /// Block until the model is loaded instead of failing with 503
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_for_model: Option<bool>,
    /// Allow the API to serve cached results for identical inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    use_cache: Option<bool>,
}

/// One translation in the inference response
///
/// The API returns a list with one element per input; this client always
/// sends exactly one input.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationOutput {
    /// Decoded model output, special tokens already stripped
    pub translation_text: String,
}

/// Builder methods for InferenceRequest - API surface for library consumers
#[allow(dead_code)]
impl InferenceRequest {
    /// Create a new inference request for a single input string
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: None,
            options: None,
        }
    }

    /// Enable or disable input truncation
    pub fn truncation(mut self, truncation: bool) -> Self {
        self.parameters
            .get_or_insert_with(InferenceParameters::default)
            .truncation = Some(truncation);
        self
    }

    /// Cap the generated output length
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.parameters
            .get_or_insert_with(InferenceParameters::default)
            .max_length = Some(max_length);
        self
    }

    /// Wait for the model to load instead of failing fast
    pub fn wait_for_model(mut self, wait: bool) -> Self {
        self.options
            .get_or_insert_with(InferenceOptions::default)
            .wait_for_model = Some(wait);
        self
    }
}

/// HuggingFace client implementation - some methods are API surface for library consumers
#[allow(dead_code)]
impl HuggingFace {
    /// Create a new client bound to a model, with default retry settings
    pub fn new(base_url: impl Into<String>, model_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new_with_config(base_url, model_id, api_key, 3, 1000, 60)
    }

    /// Create a new client with explicit retry and timeout configuration
    pub fn new_with_config(
        base_url: impl Into<String>,
        model_id: impl Into<String>,
        api_key: impl Into<String>,
        max_retries: u32,
        backoff_base_ms: u64,
        timeout_secs: u64,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model_id: model_id.into(),
            api_key: api_key.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// URL of the model endpoint
    fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model_id)
    }

    /// Send an inference request with retry logic
    ///
    /// Server errors (including 503 while the model loads) are retried with
    /// exponential backoff; client errors fail immediately.
    pub async fn infer(&self, request: InferenceRequest) -> Result<Vec<TranslationOutput>, ProviderError> {
        let url = self.model_url();

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let mut builder = self.client.post(&url).json(&request);
            if !self.api_key.is_empty() {
                builder = builder.bearer_auth(&self.api_key);
            }

            match builder.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let response_text = response.text().await.map_err(|e| {
                            ProviderError::RequestFailed(format!(
                                "Failed to read response body from {}: {}",
                                self.model_id, e
                            ))
                        })?;

                        return serde_json::from_str::<Vec<TranslationOutput>>(&response_text)
                            .map_err(|e| {
                                error!(
                                    "Failed to parse inference response from {}: {}. Raw response (first 500 chars): {}",
                                    self.model_id,
                                    e,
                                    response_text.chars().take(500).collect::<String>()
                                );
                                ProviderError::ParseError(format!(
                                    "Unexpected inference response from {}: {}",
                                    self.model_id, e
                                ))
                            });
                    } else if status == reqwest::StatusCode::UNAUTHORIZED
                        || status == reqwest::StatusCode::FORBIDDEN
                    {
                        // Bad credentials never recover on retry
                        let message = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        return Err(ProviderError::AuthenticationError(message));
                    } else if status.is_server_error() {
                        // Server error, including 503 while the model loads - can retry
                        let message = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        warn!(
                            "Inference API error ({}): {} - attempt {}/{}",
                            status,
                            message,
                            attempt + 1,
                            self.max_retries + 1
                        );
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message,
                        });
                    } else {
                        // Client error - don't retry
                        let message = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("Inference API error ({}): {}", status, message);
                        return Err(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message,
                        });
                    }
                }
                Err(e) => {
                    // Network error - can retry
                    warn!(
                        "Inference API network error: {} - attempt {}/{}",
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                    last_error = Some(ProviderError::ConnectionError(e.to_string()));
                }
            }

            attempt += 1;

            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "Inference request to {} failed after {} attempts",
                self.model_id,
                self.max_retries + 1
            ))
        }))
    }
}

#[async_trait]
impl TranslationModel for HuggingFace {
    async fn generate(&self, text: &str) -> Result<String, ProviderError> {
        let request = InferenceRequest::new(text)
            .truncation(true)
            .wait_for_model(true);

        let outputs = self.infer(request).await?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.translation_text)
            .ok_or_else(|| {
                ProviderError::ParseError(format!(
                    "Model {} returned an empty result list",
                    self.model_id
                ))
            })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = InferenceRequest::new("hello")
            .truncation(true)
            .wait_for_model(true);
        self.infer(request).await.map(|_| ())
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
