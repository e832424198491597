//! Per-message relay logic
//!
//! Decides what an inbound message means (nothing, a persona switch, or a
//! question for the model) and produces the reply text. Errors are returned
//! typed; the webhook boundary turns them into user-facing replies.

use crate::error::{Error, Result};
use crate::models::webhook::InboundMessage;
use crate::state::AppState;

/// Prefix that turns a message into a persona switch, matched case-insensitively.
pub const SWITCH_COMMAND: &str = "!switch";

/// What an inbound message asks the relay to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    /// Switch persona. `None` when the command had no argument.
    Switch(Option<&'a str>),
    Chat(&'a str),
}

impl<'a> Command<'a> {
    /// Classify already-trimmed message text.
    pub fn parse(text: &'a str) -> Self {
        if text.is_empty() {
            return Command::Empty;
        }

        if text.to_lowercase().starts_with(SWITCH_COMMAND) {
            return Command::Switch(text.split_whitespace().nth(1));
        }

        Command::Chat(text)
    }
}

/// Produce the reply text for one inbound message.
pub async fn process_message(state: &AppState, message: &InboundMessage) -> Result<String> {
    let key = state.sessions.key_for(message);

    match Command::parse(message.text()) {
        Command::Empty => Err(Error::EmptyInput),
        Command::Switch(candidate) => {
            let persona = state.sessions.try_switch(&key, candidate.unwrap_or("")).await?;
            Ok(format!(
                "✅ Switched to {} mode.",
                persona.as_str().to_uppercase()
            ))
        }
        Command::Chat(text) => {
            let persona = state.sessions.get_active_persona(&key).await;
            let instruction = state.personas.lookup(persona);

            tracing::debug!(persona = %persona, text = %text, "Forwarding message to model");

            let reply = state.gateway.generate(instruction, text).await?;
            Ok(reply)
        }
    }
}
