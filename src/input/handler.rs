use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Vector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Set the snake's direction; always one of the four unit vectors
    Steer(Vector),
    TogglePause,
    Restart,
    Quit,
    None,
}

/// Maps terminal key presses to game actions
///
/// Letter bindings ignore case, so Shift and Caps Lock do not matter.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if c.eq_ignore_ascii_case(&'c') {
                    KeyAction::Quit
                } else {
                    KeyAction::None
                }
            }
            KeyCode::Up => KeyAction::Steer(Vector::UP),
            KeyCode::Down => KeyAction::Steer(Vector::DOWN),
            KeyCode::Left => KeyAction::Steer(Vector::LEFT),
            KeyCode::Right => KeyAction::Steer(Vector::RIGHT),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) => Self::char_action(c.to_ascii_lowercase()),
            _ => KeyAction::None,
        }
    }

    fn char_action(c: char) -> KeyAction {
        match c {
            'w' => KeyAction::Steer(Vector::UP),
            's' => KeyAction::Steer(Vector::DOWN),
            'a' => KeyAction::Steer(Vector::LEFT),
            'd' => KeyAction::Steer(Vector::RIGHT),
            'p' | ' ' => KeyAction::TogglePause,
            'r' => KeyAction::Restart,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_bindings() {
        let handler = InputHandler::new();
        let cases = [
            (KeyCode::Up, KeyAction::Steer(Vector::UP)),
            (KeyCode::Down, KeyAction::Steer(Vector::DOWN)),
            (KeyCode::Left, KeyAction::Steer(Vector::LEFT)),
            (KeyCode::Right, KeyAction::Steer(Vector::RIGHT)),
            (KeyCode::Char('w'), KeyAction::Steer(Vector::UP)),
            (KeyCode::Char('s'), KeyAction::Steer(Vector::DOWN)),
            (KeyCode::Char('a'), KeyAction::Steer(Vector::LEFT)),
            (KeyCode::Char('d'), KeyAction::Steer(Vector::RIGHT)),
            (KeyCode::Char('p'), KeyAction::TogglePause),
            (KeyCode::Char(' '), KeyAction::TogglePause),
            (KeyCode::Char('r'), KeyAction::Restart),
            (KeyCode::Char('q'), KeyAction::Quit),
            (KeyCode::Esc, KeyAction::Quit),
            (KeyCode::Char('x'), KeyAction::None),
            (KeyCode::Enter, KeyAction::None),
        ];

        for (code, expected) in cases {
            assert_eq!(
                handler.handle_key_event(key(code, KeyModifiers::NONE)),
                expected,
                "binding for {:?}",
                code
            );
        }
    }

    #[test]
    fn test_letters_ignore_case() {
        let handler = InputHandler::new();

        for c in ['w', 'a', 's', 'd', 'p', 'r', 'q'] {
            let lower = handler.handle_key_event(key(KeyCode::Char(c), KeyModifiers::NONE));
            let upper = handler.handle_key_event(key(
                KeyCode::Char(c.to_ascii_uppercase()),
                KeyModifiers::SHIFT,
            ));
            assert_eq!(lower, upper, "case mismatch for {:?}", c);
            assert_ne!(lower, KeyAction::None);
        }
    }

    #[test]
    fn test_control_chords() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        // Ctrl+letter is not a game key, even if the letter alone is
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            KeyAction::None
        );
        // A plain 'c' has no binding
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            KeyAction::None
        );
    }

    #[test]
    fn test_steering_only_yields_unit_directions() {
        let handler = InputHandler::new();
        let codes = [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Char('w'),
            KeyCode::Char('a'),
            KeyCode::Char('s'),
            KeyCode::Char('d'),
        ];

        let mut seen = Vec::new();
        for code in codes {
            match handler.handle_key_event(key(code, KeyModifiers::NONE)) {
                KeyAction::Steer(direction) => {
                    assert!(direction.is_unit_direction());
                    seen.push(direction);
                }
                other => panic!("{:?} produced {:?}", code, other),
            }
        }

        for direction in Vector::DIRECTIONS {
            assert!(seen.contains(&direction), "no key steers {}", direction);
        }
    }
}
