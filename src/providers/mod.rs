/*!
 * Model backend implementations for the translator facade.
 *
 * This module contains handle implementations for pretrained translation
 * models:
 * - HuggingFace: hosted OPUS-MT model pairs over the inference API
 * - Mock: scripted behavior for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for pretrained translation model handles
///
/// A handle is bound to one model, and therefore one translation direction;
/// the facade owns one handle per direction and picks between them. Handles
/// are stateless per call and safe to share read-only.
#[async_trait]
pub trait TranslationModel: Send + Sync + Debug {
    /// Run the model over a single input string
    ///
    /// # Arguments
    /// * `text` - The text to translate
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The decoded model output or an error
    async fn generate(&self, text: &str) -> Result<String, ProviderError>;

    /// Test that the model can be reached
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the model responds, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Identifier of the underlying model
    fn model_id(&self) -> &str;
}

pub mod hugging_face;
pub mod mock;
