use async_trait::async_trait;
use persona_relay::{GenerationError, ModelGateway};
use std::sync::Mutex;
use std::time::Duration;

/// How the stub model answers.
#[derive(Debug, Clone)]
pub enum GatewayBehavior {
    /// Reply with a fixed text.
    Reply(String),
    /// Echo `"{instruction} | {text}"` back.
    Echo,
    /// Fail every call with the given error.
    Fail(GenerationError),
    /// Sleep before replying.
    Slow(Duration, String),
}

/// Model gateway stub that records every call.
pub struct RecordingGateway {
    behavior: GatewayBehavior,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingGateway {
    pub fn new(behavior: GatewayBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(system_instruction, user_text)` for each call, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for RecordingGateway {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_instruction.to_string(), user_text.to_string()));

        match &self.behavior {
            GatewayBehavior::Reply(text) => Ok(text.clone()),
            GatewayBehavior::Echo => Ok(format!("{} | {}", system_instruction, user_text)),
            GatewayBehavior::Fail(err) => Err(err.clone()),
            GatewayBehavior::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
        }
    }
}
