//! Gemini implementation of the model gateway

use std::fmt;
use std::future::{Future, IntoFuture};
use std::time::Duration;

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini::Client;
use secrecy::{ExposeSecret, SecretString};

use super::{build_prompt, ModelGateway};
use crate::config::AiConfig;
use crate::error::GenerationError;

pub struct GeminiGateway {
    client: Option<Client>,
    model: String,
    timeout: Duration,
    max_attempts: u32,
}

impl fmt::Debug for GeminiGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiGateway")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("max_attempts", &self.max_attempts)
            .field("client", &self.client.as_ref().map(|_| "<Gemini Client>"))
            .finish()
    }
}

impl GeminiGateway {
    /// Create a gateway from configuration.
    ///
    /// A missing key or a client that fails to build leaves the gateway
    /// uninitialized; every call then fails with
    /// [`GenerationError::Uninitialized`].
    pub fn new(config: &AiConfig) -> Self {
        let client = match config.api_key.as_ref() {
            Some(api_key) => match build_client(api_key, config.base_url.as_deref()) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to create Gemini client");
                    None
                }
            },
            None => {
                tracing::warn!("No Gemini API key configured");
                None
            }
        };

        Self {
            client,
            model: config.model.clone(),
            timeout: config.timeout(),
            max_attempts: config.max_attempts(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.client.is_some()
    }
}

fn build_client(api_key: &SecretString, base_url: Option<&str>) -> Result<Client, String> {
    if let Some(url) = base_url {
        tracing::info!(base_url = %url, "Creating Gemini client with custom base URL");
        Client::builder()
            .api_key(api_key.expose_secret())
            .base_url(url)
            .build()
            .map_err(|e| e.to_string())
    } else {
        tracing::info!("Creating Gemini client with default base URL");
        Client::new(api_key.expose_secret()).map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, GenerationError> {
        let Some(client) = self.client.as_ref() else {
            return Err(GenerationError::Uninitialized);
        };

        let prompt = build_prompt(system_instruction, user_text);
        let agent = client.agent(&self.model).build();

        call_with_timeout(self.timeout, self.max_attempts, || {
            let request = agent.prompt(prompt.as_str()).into_future();
            async move {
                request
                    .await
                    .map_err(|e| GenerationError::Provider(e.to_string()))
            }
        })
        .await
    }
}

/// Run `call` under `timeout`, retrying only attempts that time out.
///
/// Returns the first completed attempt's result, or a timeout once every
/// attempt has timed out. A blank reply counts as [`GenerationError::EmptyReply`].
pub(crate) async fn call_with_timeout<F, Fut>(
    timeout: Duration,
    max_attempts: u32,
    mut call: F,
) -> Result<String, GenerationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, GenerationError>>,
{
    for attempt in 1..=max_attempts.max(1) {
        match tokio::time::timeout(timeout, call()).await {
            Ok(result) => return result.and_then(non_empty),
            Err(_) => {
                tracing::warn!(attempt, timeout = ?timeout, "Model call timed out");
            }
        }
    }

    Err(GenerationError::Timeout(timeout))
}

fn non_empty(reply: String) -> Result<String, GenerationError> {
    if reply.trim().is_empty() {
        Err(GenerationError::EmptyReply)
    } else {
        Ok(reply)
    }
}
