//! TwiML reply envelope
//!
//! The messaging provider reads the webhook's HTTP response body as TwiML and
//! delivers each `<Message>` element back to the sender.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use quick_xml::escape::escape;

pub const TWIML_CONTENT_TYPE: &str = "text/xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A single-message TwiML reply, always sent with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwimlReply(String);

impl TwimlReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Serialize to a `<Response>` document holding exactly one `<Message>`.
    pub fn to_xml(&self) -> String {
        let text = strip_invalid_xml_chars(&self.0);
        format!(
            "{}<Response><Message>{}</Message></Response>",
            XML_DECLARATION,
            escape(text.as_str())
        )
    }
}

impl IntoResponse for TwimlReply {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)],
            self.to_xml(),
        )
            .into_response()
    }
}

/// Drop characters outside the XML 1.0 `Char` production.
///
/// Escaping cannot make these legal, and one stray control character from the
/// model would make the whole document unparseable.
fn strip_invalid_xml_chars(text: &str) -> String {
    text.chars().filter(|&c| is_xml_char(c)).collect()
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
}
