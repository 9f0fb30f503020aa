use anyhow::Result;
use log::debug;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::replies::{CannedReply, select_reply};
use crate::session::SessionMachine;
use crate::translation::{TranslationOutcome, TranslationService};

// @module: Application controller for the chat flow

/// One complete chat turn: the translation outcome plus the bot's reply
///
/// The reply is only present for successful translations; unsupported or
/// undetected input carries its notice and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    /// What the translator facade produced
    pub outcome: TranslationOutcome,
    /// Canned reply selected from the translated text
    pub reply: Option<CannedReply>,
}

/// Main application controller wiring the session machine to the translator
pub struct ChatController {
    // @field: Translator facade
    service: TranslationService,

    // @field: Session state machine
    machine: SessionMachine,
}

impl ChatController {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: &Config) -> Result<Self> {
        let service = TranslationService::new(&config.models)?;
        Ok(Self::with_service(service))
    }

    /// Create a controller around an explicit translation service
    pub fn with_service(service: TranslationService) -> Self {
        Self {
            service,
            machine: SessionMachine::new(),
        }
    }

    /// The session state machine, for reading state and session data
    pub fn machine(&self) -> &SessionMachine {
        &self.machine
    }

    /// Mutable access to the session state machine, for driving transitions
    pub fn machine_mut(&mut self) -> &mut SessionMachine {
        &mut self.machine
    }

    /// The translator facade
    pub fn service(&self) -> &TranslationService {
        &self.service
    }

    /// Process one chat submission
    ///
    /// Validates the session state and the message, translates, and selects
    /// the canned reply when a translation was produced. One call per user
    /// action; nothing is retained between calls.
    pub async fn submit_message(&self, input: &str) -> Result<ChatExchange, AppError> {
        let message = self.machine.validate_message(input)?;

        debug!("Processing chat submission ({} chars)", message.chars().count());
        let outcome = self.service.translate(message).await?;

        let reply = match &outcome {
            TranslationOutcome::Translated { text, .. } => Some(select_reply(text)),
            _ => None,
        };

        Ok(ChatExchange { outcome, reply })
    }
}
