use serde::{Deserialize, Serialize};

/// Form fields posted by the messaging provider for an inbound message.
///
/// Only `Body` drives the relay. `From` is read when sessions are scoped per
/// sender. The remaining fields are logged: `MessageSid` and `NumMedia` at
/// info, the sender details at debug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "Body", default)]
    pub body: String,
    #[serde(rename = "From", default)]
    pub from: Option<String>,
    #[serde(rename = "To", default)]
    pub to: Option<String>,
    #[serde(rename = "MessageSid", default)]
    pub message_sid: Option<String>,
    #[serde(rename = "AccountSid", default)]
    pub account_sid: Option<String>,
    #[serde(rename = "NumMedia", default)]
    pub num_media: Option<String>,
    #[serde(rename = "ProfileName", default)]
    pub profile_name: Option<String>,
}

impl InboundMessage {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_sender(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Message text with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.body.trim()
    }

    /// Sender identifier, if the provider sent a non-blank one.
    pub fn sender(&self) -> Option<&str> {
        self.from
            .as_deref()
            .map(str::trim)
            .filter(|from| !from.is_empty())
    }
}
