//! Screen addresses.

use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::entities::PersonaId;
use crate::infrastructure::config::StartScreen;

/// A screen the app can mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Personas,
    CreatePersona,
    Campaigns,
    /// Studio, optionally with a persona already selected.
    Studio { persona: Option<PersonaId> },
}

impl Route {
    /// Routes shown in the header, with their function keys.
    pub const TABS: [(&'static str, &'static str); 5] = [
        ("F1", "Home"),
        ("F2", "Personas"),
        ("F3", "New Persona"),
        ("F4", "Campaigns"),
        ("F5", "Studio"),
    ];

    /// Startup route from configuration.
    #[must_use]
    pub fn initial(screen: StartScreen, persona: Option<String>) -> Self {
        match screen {
            StartScreen::Home => Self::Home,
            StartScreen::Personas => Self::Personas,
            StartScreen::CreatePersona => Self::CreatePersona,
            StartScreen::Campaigns => Self::Campaigns,
            StartScreen::Studio => Self::Studio {
                persona: persona.map(PersonaId::new),
            },
        }
    }

    /// Global navigation keys, valid on every screen.
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::F(1) => Some(Self::Home),
            KeyCode::F(2) => Some(Self::Personas),
            KeyCode::F(3) => Some(Self::CreatePersona),
            KeyCode::F(4) => Some(Self::Campaigns),
            KeyCode::F(5) => Some(Self::Studio { persona: None }),
            _ => None,
        }
    }

    /// Position in [`Route::TABS`].
    #[must_use]
    pub const fn tab_index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Personas => 1,
            Self::CreatePersona => 2,
            Self::Campaigns => 3,
            Self::Studio { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_initial_studio_keeps_persona() {
        let route = Route::initial(StartScreen::Studio, Some("p2".to_string()));
        assert_eq!(
            route,
            Route::Studio {
                persona: Some(PersonaId::new("p2"))
            }
        );
    }

    #[test]
    fn test_initial_ignores_persona_elsewhere() {
        assert_eq!(
            Route::initial(StartScreen::Campaigns, Some("p2".to_string())),
            Route::Campaigns
        );
    }

    #[test]
    fn test_function_keys() {
        let key = KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE);
        assert_eq!(Route::from_key(&key), Some(Route::CreatePersona));

        let key = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(Route::from_key(&key), None);
    }
}
