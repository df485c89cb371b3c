//! Key mapping from terminal events to game input events.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a game input event.
///
/// Control-modified keys and key releases never map, so Ctrl-C is left to
/// [`should_exit`] instead of turning into a hold.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(InputEvent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(InputEvent::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(InputEvent::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(InputEvent::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(InputEvent::HardDrop),
        KeyCode::Char('c' | 'C') => Some(InputEvent::Hold),
        KeyCode::Char('q' | 'Q') => Some(InputEvent::Quit),

        _ => None,
    }
}

/// Host-level restart key (only meaningful once the session is over).
pub fn is_restart(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && !key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('r' | 'R'))
}

/// Check if key should leave the program immediately.
pub fn should_exit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(InputEvent::MoveLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(InputEvent::MoveRight)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(InputEvent::SoftDrop)
        );

        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(InputEvent::MoveLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('l'))),
            Some(InputEvent::MoveRight)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(InputEvent::SoftDrop)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::Rotate)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(InputEvent::Rotate)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(InputEvent::Rotate)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputEvent::HardDrop)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(InputEvent::Hold)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('r'))), None);
    }

    #[test]
    fn test_ctrl_c_is_exit_not_hold() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_exit(key));
        assert_eq!(map_key_event(key), None);
        assert!(!should_exit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = KeyEvent::from(KeyCode::Left);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key_event(key), None);
    }

    #[test]
    fn test_restart_key() {
        assert!(is_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(is_restart(KeyEvent::from(KeyCode::Char('R'))));
        assert!(!is_restart(KeyEvent::from(KeyCode::Char('q'))));
    }
}
