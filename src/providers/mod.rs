//! Model gateway
//!
//! A narrow interface over the generative-text provider: one system
//! instruction and one user message in, reply text or a typed error out.

pub mod gemini;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use gemini::GeminiGateway;

/// Submits a persona instruction and user text to a language model.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
    ) -> std::result::Result<String, GenerationError>;
}

/// Single-prompt template sent to the model.
pub fn build_prompt(system_instruction: &str, user_text: &str) -> String {
    format!("System: {}\nUser: {}", system_instruction, user_text)
}
