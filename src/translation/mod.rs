/*!
 * Translation facade over the pretrained model pair.
 *
 * The facade owns one model handle per direction and routes each input
 * through language detection before invoking the matching model.
 */

pub mod service;

pub use service::{TranslationOutcome, TranslationService};
