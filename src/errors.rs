/*!
 * Error types for the linguachat application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling a translation model backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors raised by session state transitions and input validation
#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    /// Name must be filled in before confirming the selection
    #[error("Please enter your name.")]
    EmptyName,

    /// Chat messages must be non-empty
    #[error("Please enter a message.")]
    EmptyMessage,

    /// Sector not present in the company directory
    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    /// Company not present under the selected sector
    #[error("Unknown company for sector {sector}: {company}")]
    UnknownCompany {
        /// Selected sector
        sector: String,
        /// Rejected company name
        company: String
    },

    /// Transition attempted from the wrong state
    #[error("Invalid transition: {0}")]
    InvalidTransition(&'static str),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the model backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a session transition or input validation
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Error from a model backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error in configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
