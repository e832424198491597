//! Messaging provider webhook
//!
//! The provider posts each inbound message as a form and delivers whatever
//! TwiML comes back. Every outcome, including failures, is answered with
//! HTTP 200 and a single `<Message>`.

use axum::{
    extract::{rejection::FormRejection, State},
    Form,
};

use crate::{
    error::Result,
    models::{twiml::TwimlReply, webhook::InboundMessage},
    services::relay::process_message,
    state::AppState,
};

/// Handles `POST /bot`.
///
/// A body that cannot be decoded as a form is treated as an empty message.
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:3000/bot \
///   --data-urlencode 'Body=!switch coach'
/// # Returns: <?xml version="1.0" encoding="UTF-8"?><Response><Message>✅ Switched to COACH mode.</Message></Response>
/// ```
#[tracing::instrument(skip_all)]
pub async fn receive_message(
    State(state): State<AppState>,
    form: std::result::Result<Form<InboundMessage>, FormRejection>,
) -> Result<TwimlReply> {
    let message = match form {
        Ok(Form(message)) => message,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Could not decode webhook form");
            InboundMessage::default()
        }
    };

    tracing::info!(
        message_sid = message.message_sid.as_deref().unwrap_or("-"),
        num_media = message.num_media.as_deref().unwrap_or("0"),
        "Received inbound message"
    );
    tracing::debug!(
        from = message.from.as_deref().unwrap_or("-"),
        to = message.to.as_deref().unwrap_or("-"),
        account_sid = message.account_sid.as_deref().unwrap_or("-"),
        profile_name = message.profile_name.as_deref().unwrap_or("-"),
        "Inbound message sender"
    );

    let reply = process_message(&state, &message).await?;
    Ok(TwimlReply::new(reply))
}
