pub mod twiml;
pub mod webhook;

pub use twiml::TwimlReply;
pub use webhook::InboundMessage;
