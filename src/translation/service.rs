/*!
 * Core translation facade implementation.
 *
 * This module contains the main TranslationService struct and its
 * implementation, which routes chat input by language and translates it
 * using the matching pretrained model.
 */

use anyhow::Result;
use log::{debug, info, warn};

use crate::app_config::ModelsConfig;
use crate::errors::{ProviderError, TranslationError};
use crate::language_detect::language_name;
use crate::providers::TranslationModel;
use crate::providers::hugging_face::HuggingFace;
use crate::router::{Direction, Route, route};

/// Result of running one chat submission through the facade
///
/// Unsupported and undetected input are ordinary outcomes, not errors;
/// only a failed model invocation surfaces as `Err` from
/// [`TranslationService::translate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Text was translated along the given direction
    Translated {
        /// Decoded model output
        text: String,
        /// Direction the text was routed to
        direction: Direction,
    },
    /// Text was classified as a language outside the supported pair
    Unsupported {
        /// Detected language code
        code: String,
    },
    /// The detector could not classify the text
    Undetected,
}

impl TranslationOutcome {
    /// The direction tag for display, empty when no translation ran
    pub fn direction_label(&self) -> &'static str {
        match self {
            Self::Translated { direction, .. } => direction.label(),
            Self::Unsupported { .. } | Self::Undetected => "",
        }
    }

    /// The text to display for this outcome
    pub fn display_text(&self) -> String {
        match self {
            Self::Translated { text, .. } => text.clone(),
            Self::Unsupported { code } => format!("Unsupported language: {}", code),
            Self::Undetected => "Could not detect language.".to_string(),
        }
    }

    /// True when a translation was produced
    pub fn is_translated(&self) -> bool {
        matches!(self, Self::Translated { .. })
    }
}

/// Translation facade owning the two pretrained model handles
///
/// Handles are injected at construction and shared read-only for the
/// process lifetime; inference is stateless per call, so no locking is
/// involved.
pub struct TranslationService {
    /// Model handle for the English -> Chinese direction
    en_zh: Box<dyn TranslationModel>,
    /// Model handle for the Chinese -> English direction
    zh_en: Box<dyn TranslationModel>,
}

impl TranslationService {
    /// Create a service backed by hosted model pairs from configuration
    pub fn new(config: &ModelsConfig) -> Result<Self> {
        let en_zh = HuggingFace::new_with_config(
            &config.endpoint,
            &config.en_zh_model,
            &config.api_key,
            config.retry_count,
            config.retry_backoff_ms,
            config.timeout_secs,
        );

        let zh_en = HuggingFace::new_with_config(
            &config.endpoint,
            &config.zh_en_model,
            &config.api_key,
            config.retry_count,
            config.retry_backoff_ms,
            config.timeout_secs,
        );

        Ok(Self::with_models(Box::new(en_zh), Box::new(zh_en)))
    }

    /// Create a service from explicit model handles
    ///
    /// This is the injection point tests use to swap in mock models.
    pub fn with_models(
        en_zh: Box<dyn TranslationModel>,
        zh_en: Box<dyn TranslationModel>,
    ) -> Self {
        Self { en_zh, zh_en }
    }

    /// The model handle serving a direction
    fn model_for(&self, direction: Direction) -> &dyn TranslationModel {
        match direction {
            Direction::EnToZh => self.en_zh.as_ref(),
            Direction::ZhToEn => self.zh_en.as_ref(),
        }
    }

    /// Route and translate one chat submission
    ///
    /// Unsupported or undetectable input returns the corresponding outcome.
    /// A model invocation failure propagates as an error; the caller is
    /// responsible for rendering it as a generic translation failure.
    pub async fn translate(&self, text: &str) -> Result<TranslationOutcome, TranslationError> {
        match route(text) {
            Route::Translate(direction) => {
                let model = self.model_for(direction);
                debug!(
                    "Routing {} chars to {} ({})",
                    text.chars().count(),
                    model.model_id(),
                    direction.label()
                );

                let translated = model.generate(text).await?;

                info!(
                    "Translated ({}): {} chars in, {} chars out",
                    direction.label(),
                    text.chars().count(),
                    translated.chars().count()
                );

                Ok(TranslationOutcome::Translated {
                    text: translated,
                    direction,
                })
            }
            Route::Unsupported { code } => {
                warn!(
                    "Unsupported language: {} ({})",
                    code,
                    language_name(&code).unwrap_or_else(|| "unknown".to_string())
                );
                Ok(TranslationOutcome::Unsupported { code })
            }
            Route::Undetected => {
                warn!("Language detection failed for input");
                Ok(TranslationOutcome::Undetected)
            }
        }
    }

    /// Test that both model backends can be reached
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.en_zh.test_connection().await?;
        self.zh_en.test_connection().await?;
        Ok(())
    }
}
