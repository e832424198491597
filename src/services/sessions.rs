use crate::agents::{Persona, PersonaRegistry};
use crate::config::SessionScope;
use crate::error::Result;
use crate::models::webhook::InboundMessage;

/// Identifies whose active persona a message reads and switches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionKey {
    Global,
    Sender(String),
}

impl SessionKey {
    /// Key for an inbound message under the given scope.
    ///
    /// With [`SessionScope::Sender`], a message without a `From` field shares
    /// the global slot.
    pub fn for_message(scope: SessionScope, message: &InboundMessage) -> Self {
        match (scope, message.sender()) {
            (SessionScope::Sender, Some(from)) => SessionKey::Sender(from.to_string()),
            _ => SessionKey::Global,
        }
    }
}

/// Active persona per session key. Absent keys read as [`Persona::Default`].
///
/// Only non-default personas are stored, so the map holds one entry per key
/// that currently has a persona other than `default`.
pub struct SessionStore {
    scope: SessionScope,
    registry: PersonaRegistry,
    active: scc::HashMap<SessionKey, Persona>,
}

impl SessionStore {
    pub fn new(scope: SessionScope, registry: PersonaRegistry) -> Self {
        Self {
            scope,
            registry,
            active: scc::HashMap::new(),
        }
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    pub fn key_for(&self, message: &InboundMessage) -> SessionKey {
        SessionKey::for_message(self.scope, message)
    }

    pub async fn get_active_persona(&self, key: &SessionKey) -> Persona {
        self.active
            .read_async(key, |_, persona| *persona)
            .await
            .unwrap_or_default()
    }

    /// Make `candidate` the active persona for `key`.
    ///
    /// `candidate` must exactly match a persona name; otherwise the stored
    /// persona is left as it was. Switching to `default` drops the entry.
    pub async fn try_switch(&self, key: &SessionKey, candidate: &str) -> Result<Persona> {
        let persona = self.registry.get(candidate)?;
        if persona == Persona::Default {
            let _ = self.active.remove_async(key).await;
        } else {
            self.active.upsert_async(key.clone(), persona).await;
        }
        tracing::info!(key = ?key, persona = %persona, "Switched persona");
        Ok(persona)
    }

    /// Forget the stored persona for `key`, returning it to the default.
    pub async fn reset(&self, key: &SessionKey) {
        let _ = self.active.remove_async(key).await;
    }

    /// Number of keys holding a non-default persona.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
