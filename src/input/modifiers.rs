//! Keyboard modifier state reported alongside key events.

/// Modifier keys held while a key event was generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ctrl held alone (Alt released); Shift is reported separately.
    pub fn command(&self) -> bool {
        self.ctrl && !self.alt
    }

    /// True when Ctrl or Alt turns a character key into a shortcut.
    pub fn has_shortcut_modifier(&self) -> bool {
        self.ctrl || self.alt
    }
}
