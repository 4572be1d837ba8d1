//! Generic host input types.

/// Generic key representation.
///
/// Hosts map their native key codes to these values before handing them to
/// the interaction surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key (cancels the current interaction)
    Escape,
    /// Return/Enter key (commits text)
    Return,
    Backspace,
    Tab,
    Space,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button; drives the active tool
    Left,
    /// Cancels the current interaction
    Right,
    /// Currently unused
    Middle,
}
