//! Persona registry.
//!
//! The persona set is closed: every [`Persona`] has exactly one system
//! instruction, and strings are only accepted if they name a persona exactly.

pub mod prompts;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Persona {
    #[default]
    Default,
    Business,
    Friend,
    Coach,
    Roast,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Immutable mapping from persona to system instruction.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    pub fn new() -> Self {
        Self {
            personas: Persona::iter().collect(),
        }
    }

    /// System instruction for `persona`.
    pub fn lookup(&self, persona: Persona) -> &'static str {
        instruction_for(persona)
    }

    /// Resolve a persona name. Matching is exact and case-sensitive.
    pub fn get(&self, name: &str) -> Result<Persona> {
        self.personas()
            .find(|persona| persona.as_str() == name)
            .ok_or_else(|| Error::UnknownPersona {
                requested: name.to_string(),
                options: self.names().iter().map(|n| n.to_string()).collect(),
            })
    }

    /// Persona names in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.personas.iter().map(Persona::as_str).collect()
    }

    pub fn personas(&self) -> impl Iterator<Item = Persona> + '_ {
        self.personas.iter().copied()
    }
}

fn instruction_for(persona: Persona) -> &'static str {
    match persona {
        Persona::Default => prompts::DEFAULT,
        Persona::Business => prompts::BUSINESS,
        Persona::Friend => prompts::FRIEND,
        Persona::Coach => prompts::COACH,
        Persona::Roast => prompts::ROAST,
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
