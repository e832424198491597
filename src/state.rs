use crate::{
    agents::PersonaRegistry,
    config::Config,
    providers::{GeminiGateway, ModelGateway},
    services::sessions::SessionStore,
};
use std::sync::Arc;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Persona instructions
    pub personas: Arc<PersonaRegistry>,
    /// Active persona per session
    pub sessions: Arc<SessionStore>,
    /// Outbound language model
    pub gateway: Arc<dyn ModelGateway>,
}

impl AppState {
    /// Create a new AppState instance
    ///
    /// # Arguments
    /// * `sessions` - Session store; its registry becomes the shared persona registry
    /// * `gateway` - Model gateway used for chat messages
    pub fn new(sessions: Arc<SessionStore>, gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            personas: Arc::new(sessions.registry().clone()),
            sessions,
            gateway,
        }
    }

    /// Build the production state: fixed personas, configured session scope, Gemini gateway.
    pub fn from_config(config: &Config) -> Self {
        let sessions = SessionStore::new(config.session.scope, PersonaRegistry::new());
        let gateway = GeminiGateway::new(&config.ai);
        Self::new(Arc::new(sessions), Arc::new(gateway))
    }
}
