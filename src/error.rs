use std::time::Duration;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::twiml::TwimlReply;

/// Reply sent when the message body is empty after trimming.
pub const EMPTY_INPUT_REPLY: &str = "I didn't get any message. Send some text and I'll reply.";

/// Reply sent whenever the model could not produce an answer.
pub const GENERATION_FAILED_REPLY: &str = "My brain is tired. Try again later.";

/// The custom error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration source could not be read or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A setting the server cannot start without is missing or invalid.
    #[error("Startup configuration error: {0}")]
    StartupConfig(String),

    /// The inbound message body was empty after trimming.
    #[error("Empty message body")]
    EmptyInput,

    /// A switch command named a persona that does not exist.
    #[error("Unknown persona '{requested}'. Options: {}", .options.join(", "))]
    UnknownPersona {
        requested: String,
        options: Vec<String>,
    },

    /// The model gateway failed to produce a reply.
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// An I/O error while binding or serving.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the outbound model call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("model client is uninitialized")]
    Uninitialized,

    #[error("model call timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("model returned an empty reply")]
    EmptyReply,
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Text shown to the person on the other end of the conversation.
    ///
    /// Raw error details never leave the process; only the unknown-persona
    /// case carries data, and that data is the list of valid personas.
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptyInput => EMPTY_INPUT_REPLY.to_string(),
            Error::UnknownPersona { options, .. } => {
                format!("❌ Unknown agent. Options: {}", options.join(", "))
            }
            _ => GENERATION_FAILED_REPLY.to_string(),
        }
    }
}

/// Convert custom Error to an HTTP response
///
/// The messaging provider expects HTTP 200 and a well-formed envelope even on
/// logical failure, so every variant becomes a TwiML reply.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::EmptyInput => {
                tracing::debug!("Empty message body, prompting for input");
            }
            Error::UnknownPersona { requested, .. } => {
                tracing::info!(requested = %requested, "Rejected switch to unknown persona");
            }
            other => {
                tracing::error!(error = %other, "Failed to produce a reply");
            }
        }

        TwimlReply::new(self.user_message()).into_response()
    }
}
