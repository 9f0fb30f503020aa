/*!
 * Mock model implementations for testing.
 *
 * This module provides mock model handles that simulate different behaviors:
 * - `MockModel::working()` - Always succeeds with translated text
 * - `MockModel::failing()` - Always fails with an error
 * - `MockModel::empty()` - Succeeds with an empty string
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::TranslationModel;

/// Behavior mode for the mock model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a proper translation
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Returns an empty output string
    Empty,
    /// Simulates slow response (for timeout testing)
    Slow { delay_ms: u64 },
}

/// Mock model handle for testing translation behavior
#[derive(Debug)]
pub struct MockModel {
    /// Identifier reported as the model id
    model_id: String,
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Custom output generator (optional)
    custom_output: Option<fn(&str) -> String>,
}

impl MockModel {
    /// Create a new mock model with the specified behavior
    pub fn new(model_id: impl Into<String>, behavior: MockBehavior) -> Self {
        Self {
            model_id: model_id.into(),
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_output: None,
        }
    }

    /// Create a working mock model that always succeeds
    pub fn working(model_id: impl Into<String>) -> Self {
        Self::new(model_id, MockBehavior::Working)
    }

    /// Create an intermittently failing mock model
    pub fn intermittent(model_id: impl Into<String>, fail_every: usize) -> Self {
        Self::new(model_id, MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock model that always errors
    pub fn failing(model_id: impl Into<String>) -> Self {
        Self::new(model_id, MockBehavior::Failing)
    }

    /// Create a mock model that returns empty output
    pub fn empty(model_id: impl Into<String>) -> Self {
        Self::new(model_id, MockBehavior::Empty)
    }

    /// Set a custom output generator
    pub fn with_custom_output(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_output = Some(generator);
        self
    }

    /// Number of generate calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockModel {
    fn clone(&self) -> Self {
        Self {
            model_id: self.model_id.clone(),
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_output: self.custom_output,
        }
    }
}

#[async_trait]
impl TranslationModel for MockModel {
    async fn generate(&self, text: &str) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                // Use custom output if set, otherwise generate default
                let output = if let Some(generator) = self.custom_output {
                    generator(text)
                } else {
                    format!("[{}] {}", self.model_id, text)
                };
                Ok(output)
            }

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                    })
                } else {
                    Ok(format!("[{}] {}", self.model_id, text))
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated model failure".to_string(),
            }),

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(format!("[{}] {}", self.model_id, text))
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
