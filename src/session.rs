/*!
 * Session state machine for the chat flow.
 *
 * This module handles:
 * - The two-screen session lifecycle (company selection, chat)
 * - Validation of the user's name and directory selections
 * - Validation of chat message submissions
 *
 * The machine is independent of any rendering layer; a front end drives it
 * through the explicit transition methods and renders whatever state it
 * reports.
 */

use log::{debug, info};

use crate::directory;
use crate::errors::SessionError;

/// The two screens of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Collecting name, sector, and company
    SelectingCompany,
    /// Setup confirmed, chatting
    Chatting,
}

/// User identity and selection data held for the lifetime of a session
///
/// Nothing here is persisted; the session is discarded when the process
/// ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    /// Display name entered by the user
    pub name: String,
    /// Selected sector, one of the directory's fixed set
    pub sector: String,
    /// Selected company within the sector
    pub company: String,
}

/// Two-state session machine driving the chat flow
#[derive(Debug, Clone)]
pub struct SessionMachine {
    state: SessionState,
    session: UserSession,
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMachine {
    /// Create a fresh machine on the selection screen
    pub fn new() -> Self {
        Self {
            state: SessionState::SelectingCompany,
            session: UserSession::default(),
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Session data, readable in either state
    pub fn session(&self) -> &UserSession {
        &self.session
    }

    /// Set the user's name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.session.name = name.into();
    }

    /// Select a sector from the directory
    ///
    /// Changing sector clears any previous company selection, since
    /// companies are only valid within their sector.
    pub fn select_sector(&mut self, sector: &str) -> Result<(), SessionError> {
        if directory::companies_in(sector).is_none() {
            return Err(SessionError::UnknownSector(sector.to_string()));
        }

        if self.session.sector != sector {
            self.session.company.clear();
        }
        self.session.sector = sector.to_string();
        Ok(())
    }

    /// Select a company within the current sector
    pub fn select_company(&mut self, company: &str) -> Result<(), SessionError> {
        if !directory::contains(&self.session.sector, company) {
            return Err(SessionError::UnknownCompany {
                sector: self.session.sector.clone(),
                company: company.to_string(),
            });
        }

        self.session.company = company.to_string();
        Ok(())
    }

    /// Confirm the selection and move to the chat screen
    ///
    /// Rejected with an inline warning when the name is empty, and when the
    /// sector/company pair is not a directory entry. The machine stays on
    /// the selection screen on rejection.
    pub fn confirm(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::SelectingCompany {
            return Err(SessionError::InvalidTransition(
                "confirm is only valid on the selection screen",
            ));
        }

        if self.session.name.trim().is_empty() {
            return Err(SessionError::EmptyName);
        }

        if !directory::contains(&self.session.sector, &self.session.company) {
            return Err(SessionError::UnknownCompany {
                sector: self.session.sector.clone(),
                company: self.session.company.clone(),
            });
        }

        info!(
            "Session confirmed: {} collaborating with {} ({})",
            self.session.name, self.session.company, self.session.sector
        );
        self.state = SessionState::Chatting;
        Ok(())
    }

    /// Return to the selection screen
    ///
    /// Name, sector, and company are retained so the user can adjust rather
    /// than re-enter them.
    pub fn go_back(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::Chatting {
            return Err(SessionError::InvalidTransition(
                "go_back is only valid while chatting",
            ));
        }

        debug!("Returning to company selection");
        self.state = SessionState::SelectingCompany;
        Ok(())
    }

    /// Validate a chat message submission
    ///
    /// Returns the trimmed message. Rejected when the machine is not on the
    /// chat screen or when the message is empty or whitespace-only.
    pub fn validate_message<'a>(&self, message: &'a str) -> Result<&'a str, SessionError> {
        if self.state != SessionState::Chatting {
            return Err(SessionError::InvalidTransition(
                "messages can only be sent while chatting",
            ));
        }

        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        Ok(trimmed)
    }
}
