//! Persona entity.

use serde::{Deserialize, Serialize};

use super::labels::{AgeRange, Gender, Niche, Tone, Voice};

/// Backend-assigned persona identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaId(String);

impl PersonaId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonaId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PersonaId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Editable persona attributes, collected by the creation wizard and sent
/// as the create request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaDraft {
    pub name: String,
    pub niche: Niche,
    pub tone: Tone,
    pub gender: Gender,
    pub age: AgeRange,
    pub style: String,
    pub voice: Voice,
    pub bio: String,
}

impl Default for PersonaDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            niche: Niche::default(),
            tone: Tone::default(),
            gender: Gender::default(),
            age: AgeRange::default(),
            style: "Modern".to_string(),
            voice: Voice::default(),
            bio: String::new(),
        }
    }
}

impl PersonaDraft {
    /// Creates a draft with the form defaults and the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A configured AI influencer identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    id: PersonaId,
    details: PersonaDraft,
}

impl Persona {
    /// Creates a persona from its identifier and attributes.
    #[must_use]
    pub fn new(id: impl Into<PersonaId>, details: PersonaDraft) -> Self {
        Self {
            id: id.into(),
            details,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &PersonaId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.details.name
    }

    #[must_use]
    pub const fn niche(&self) -> &Niche {
        &self.details.niche
    }

    #[must_use]
    pub const fn tone(&self) -> &Tone {
        &self.details.tone
    }

    #[must_use]
    pub fn style(&self) -> &str {
        &self.details.style
    }

    #[must_use]
    pub const fn voice(&self) -> &Voice {
        &self.details.voice
    }

    #[must_use]
    pub fn bio(&self) -> &str {
        &self.details.bio
    }

    /// Returns every attribute.
    #[must_use]
    pub const fn details(&self) -> &PersonaDraft {
        &self.details
    }

    /// Returns the first character of the name, used as an avatar glyph.
    #[must_use]
    pub fn initial(&self) -> char {
        self.details.name.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = PersonaDraft::default();
        assert!(draft.name.is_empty());
        assert_eq!(draft.style, "Modern");
        assert_eq!(draft.voice, Voice::A);
        assert!(draft.bio.is_empty());
    }

    #[test]
    fn test_draft_serializes_wire_fields() {
        let json = serde_json::to_value(PersonaDraft::named("Sarah")).unwrap();
        assert_eq!(json["name"], "Sarah");
        assert_eq!(json["niche"], "Tech");
        assert_eq!(json["age"], "25-30");
        assert_eq!(json["voice"], "Voice A");
    }

    #[test]
    fn test_persona_accessors() {
        let persona = Persona::new("p1", PersonaDraft::named("Sarah"));
        assert_eq!(persona.id().as_str(), "p1");
        assert_eq!(persona.name(), "Sarah");
        assert_eq!(persona.initial(), 'S');
    }

    #[test]
    fn test_initial_of_unnamed_persona() {
        let persona = Persona::new("p9", PersonaDraft::default());
        assert_eq!(persona.initial(), '?');
    }
}
