//! Error types and handling for the `TripAI` client

use thiserror::Error;

/// Main error type for the `TripAI` client
#[derive(Error, Debug)]
pub enum TripAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Planning API communication errors, carrying the server's `detail`
    /// message or the transport status text
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// PDF export requested before any itinerary was generated
    #[error("No itinerary available")]
    MissingItinerary,

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    ///
    /// API errors carry the server's own `detail` text, which is already
    /// user-facing and is surfaced verbatim in the status line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripAiError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripAiError::Api { message } => message.clone(),
            TripAiError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripAiError::MissingItinerary => "No itinerary available".to_string(),
            TripAiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripAiError::General { message } => message.clone(),
        }
    }
}
