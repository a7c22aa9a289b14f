//! Key binding definitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Matches the application's global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Key pressed together with Ctrl (or Super) to toggle the palette.
    pub palette_key: char,
    /// Key that toggles the navigation drawer.
    pub menu_key: char,
}

impl KeyBindings {
    pub fn new(palette_key: char, menu_key: char) -> Self {
        Self {
            palette_key,
            menu_key,
        }
    }

    /// Ctrl+K, or Super+K where the terminal reports the platform key.
    ///
    /// The key must match exactly, so a shifted `K` does not count.
    pub fn is_palette_toggle(&self, key: &KeyEvent) -> bool {
        let modifier = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::SUPER);
        modifier && key.code == KeyCode::Char(self.palette_key)
    }

    pub fn is_menu_toggle(&self, key: &KeyEvent) -> bool {
        key.modifiers == KeyModifiers::NONE && key.code == KeyCode::Char(self.menu_key)
    }

    /// `q` or Ctrl+C.
    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
        )
    }

    /// Ctrl+C alone, which works even while typing in the palette.
    pub fn is_force_quit(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL
    }

    /// Lines to scroll the page for `key`, if it is a scroll key.
    pub fn scroll_delta(&self, key: &KeyEvent, page: u16) -> Option<i32> {
        match (key.code, key.modifiers) {
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Some(1),
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Some(-1),
            (KeyCode::PageDown, _) | (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                Some(page as i32)
            }
            (KeyCode::PageUp, _) | (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                Some(-(page as i32))
            }
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new('k', 'm')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_toggle() {
        let keys = KeyBindings::default();
        assert!(keys.is_palette_toggle(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)));
        assert!(keys.is_palette_toggle(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER)));
        assert!(!keys.is_palette_toggle(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!keys.is_palette_toggle(&KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shifted_palette_key_does_not_toggle() {
        let keys = KeyBindings::default();
        assert!(!keys.is_palette_toggle(&KeyEvent::new(
            KeyCode::Char('K'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
        assert!(!keys.is_palette_toggle(&KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SUPER)));
    }

    #[test]
    fn test_quit_keys() {
        let keys = KeyBindings::default();
        assert!(keys.is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(keys.is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!keys.is_force_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_scroll_delta() {
        let keys = KeyBindings::default();
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let page_up = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(keys.scroll_delta(&j, 10), Some(1));
        assert_eq!(keys.scroll_delta(&page_up, 10), Some(-10));
        assert_eq!(
            keys.scroll_delta(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), 10),
            None
        );
    }
}
