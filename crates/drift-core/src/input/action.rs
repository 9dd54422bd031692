//! The tagged input action handed to injectors.

use std::fmt;

use crate::domain::geometry::Point;

use super::keymap::ActivityKey;

/// One unit of synthesized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move the cursor to an absolute pixel position.
    MoveTo(Point),
    /// Press and then release a key.
    KeyTap(ActivityKey),
}

impl InputAction {
    /// Number of native events this action expands to.
    ///
    /// Injectors compare this with the number of events the OS accepted to
    /// detect partial injection.
    pub fn event_count(&self) -> u32 {
        match self {
            Self::MoveTo(_) => 1,
            Self::KeyTap(_) => 2,
        }
    }
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "move to ({}, {})", p.x, p.y),
            Self::KeyTap(key) => write!(f, "tap {key}"),
        }
    }
}
