//! Key mapping for simulation control
//!
//! Converts key events to driver commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the user asked the driver to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Halve the tick interval (`+`)
    Faster,
    /// Double the tick interval (`-`)
    Slower,
    /// Toggle play/pause (`p` or space)
    TogglePause,
    /// Advance a single generation (`s`)
    Step,
    /// Leave the program (`q` or Ctrl+C)
    Quit,
}

/// Key mapper for converting key events to commands
pub struct KeyMapper;

impl KeyMapper {
    /// Map a crossterm KeyEvent to a command, ignoring releases and repeats
    pub fn map(event: &KeyEvent) -> Option<Command> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        // Raw mode swallows SIGINT
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Char('+') => Some(Command::Faster),
            KeyCode::Char('-') => Some(Command::Slower),
            KeyCode::Char('p') | KeyCode::Char(' ') => Some(Command::TogglePause),
            KeyCode::Char('s') => Some(Command::Step),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn test_control_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Char('+'), none)), Some(Command::Faster));
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Char('-'), none)), Some(Command::Slower));
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Char('p'), none)), Some(Command::TogglePause));
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Char(' '), none)), Some(Command::TogglePause));
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Char('s'), none)), Some(Command::Step));
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Char('q'), none)), Some(Command::Quit));
    }

    #[test]
    fn test_shifted_plus() {
        // Most layouts need Shift for '+'
        let event = key_event(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(KeyMapper::map(&event), Some(Command::Faster));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map(&event), Some(Command::Quit));

        let event = key_event(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map(&event), None);
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Enter, KeyModifiers::NONE)), None);
        assert_eq!(KeyMapper::map(&key_event(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_release_ignored() {
        let event = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(KeyMapper::map(&event), None);
    }
}
