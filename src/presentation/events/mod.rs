//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Key classification shared by every screen.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event. Plain letters are left to text fields.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c' | 'q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks for `Ctrl+<c>`.
    #[must_use]
    pub fn is_ctrl(key: &KeyEvent, c: char) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
    }

    /// Release and repeat events are ignored.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test_case(KeyCode::Char('q'), KeyModifiers::CONTROL, true ; "ctrl q")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, true ; "ctrl c")]
    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, false ; "plain q types")]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, false ; "esc closes modals")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, false ; "enter")]
    fn test_quit_events(code: KeyCode, modifiers: KeyModifiers, expected: bool) {
        assert_eq!(
            EventHandler::is_quit_event(&make_key_event(code, modifiers)),
            expected
        );
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_ctrl_shortcut() {
        let key = make_key_event(KeyCode::Char('g'), KeyModifiers::CONTROL);
        assert!(EventHandler::is_ctrl(&key, 'g'));
        assert!(!EventHandler::is_ctrl(&key, 'd'));
        assert!(!EventHandler::is_ctrl(
            &make_key_event(KeyCode::Char('g'), KeyModifiers::NONE),
            'g'
        ));
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert!(!EventHandler::is_press(&release));
    }
}
