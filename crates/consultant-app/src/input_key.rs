//! Keyboard input, independent of the terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! the update logic and its tests never depend on crossterm.

/// Abstract input key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+t, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Keys that move focus forward through a form
    pub fn is_focus_next(&self) -> bool {
        matches!(self, InputKey::Tab | InputKey::Down)
    }

    /// Keys that move focus backward through a form
    pub fn is_focus_prev(&self) -> bool {
        matches!(self, InputKey::BackTab | InputKey::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_focus_keys() {
        assert!(InputKey::Tab.is_focus_next());
        assert!(InputKey::Down.is_focus_next());
        assert!(InputKey::BackTab.is_focus_prev());
        assert!(!InputKey::Enter.is_focus_next());
    }
}
