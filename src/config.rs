use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable read when `RELAY__AI__API_KEY` is not set.
pub const LEGACY_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// How long the messaging provider waits for a webhook response before giving up.
pub const PROVIDER_RESPONSE_DEADLINE: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub ai: AiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Gemini API key. Required before the server starts.
    #[serde(skip_serializing)]
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
    /// Retry a model call once if the first attempt times out.
    pub retry_on_timeout: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SessionConfig {
    pub scope: SessionScope,
}

/// Which callers share an active persona.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionScope {
    /// One persona for every caller of the process.
    #[default]
    Global,
    /// One persona per inbound `From` number.
    Sender,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            // Override with environment variables using `RELAY__` prefix and `__` separator
            // e.g., RELAY__SERVER__PORT=8080
            .add_source(
                config::Environment::with_prefix("RELAY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let mut config: Self = settings.try_deserialize()?;

        if config.ai.api_key.is_none() {
            config.ai.api_key = std::env::var(LEGACY_API_KEY_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from);
        }

        Ok(config)
    }

    /// Checks the settings the server cannot start without.
    pub fn validate(&self) -> Result<()> {
        if self.ai.api_key.is_none() {
            return Err(Error::StartupConfig(format!(
                "no Gemini API key: set RELAY__AI__API_KEY or {}",
                LEGACY_API_KEY_VAR
            )));
        }
        if self.ai.model.trim().is_empty() {
            return Err(Error::StartupConfig("ai.model must not be empty".to_string()));
        }
        if self.ai.timeout_seconds == 0 {
            return Err(Error::StartupConfig(
                "ai.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.ai.worst_case_wait() >= PROVIDER_RESPONSE_DEADLINE {
            return Err(Error::StartupConfig(format!(
                "ai.timeout_seconds={} with {} attempt(s) can wait {:?}, which reaches the provider's {:?} webhook deadline",
                self.ai.timeout_seconds,
                self.ai.max_attempts(),
                self.ai.worst_case_wait(),
                PROVIDER_RESPONSE_DEADLINE
            )));
        }
        Ok(())
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Model calls made per message, counting the retry after a timeout.
    pub fn max_attempts(&self) -> u32 {
        if self.retry_on_timeout { 2 } else { 1 }
    }

    /// Longest time a message can spend waiting on the model.
    pub fn worst_case_wait(&self) -> Duration {
        self.timeout().saturating_mul(self.max_attempts())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: None,
            timeout_seconds: 6,
            retry_on_timeout: true,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // api_key is skipped by serde
        match serde_json::to_string_pretty(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "Error serializing config"),
        }
    }
}
