/*!
 * # linguachat - Bilingual EN/ZH chat translator
 *
 * A Rust library for a bilingual chat demo: language detection, routed
 * machine translation, and keyword-matched canned replies.
 *
 * ## Features
 *
 * - Detect whether chat input is Chinese or English (CJK fast path,
 *   ASCII density heuristic, statistical detector)
 * - Route input to one of two pretrained translation model pairs
 *   (EN -> ZH, ZH -> EN) served over HTTP
 * - Keyword-matched canned bot replies
 * - Explicit two-state session machine (company selection, chat)
 * - Fixed sector/company directory with selection validation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_detect`: Detection heuristics and code normalization
 * - `router`: Direction selection policy
 * - `translation`: Translator facade over the model pair:
 *   - `translation::service`: Routing plus model invocation
 * - `replies`: Canned reply selection
 * - `directory`: Fixed sector/company dictionary
 * - `session`: Session state machine
 * - `app_controller`: Main application controller
 * - `providers`: Handle implementations for translation model backends:
 *   - `providers::hugging_face`: Hosted OPUS-MT model client
 *   - `providers::mock`: Scripted models for testing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
// Add other lints you want to allow but not auto-fix

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod directory;
pub mod errors;
pub mod language_detect;
pub mod providers;
pub mod replies;
pub mod router;
pub mod session;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{ChatController, ChatExchange};
pub use errors::{AppError, ProviderError, SessionError, TranslationError};
pub use replies::{CannedReply, select_reply};
pub use router::{Direction, Route, route};
pub use session::{SessionMachine, SessionState, UserSession};
pub use translation::{TranslationOutcome, TranslationService};
