//! Keys the activity routine may tap, and their native codes per platform.
//!
//! # Why these keys? (for beginners)
//!
//! An activity key must register as user input without changing anything the
//! user cares about.  Escape dismisses at most a menu; Num Lock and Scroll
//! Lock are toggled on press and toggled back by the next action; Shift and
//! F15 do nothing on their own in almost every application.
//!
//! | Key         | Windows VK | X11 KeySym | macOS kVK |
//! |-------------|------------|------------|-----------|
//! | Escape      | `0x1B`     | `0xFF1B`   | `0x35`    |
//! | Num Lock    | `0x90`     | `0xFF7F`   | `0x47` (keypad Clear) |
//! | Scroll Lock | `0x91`     | `0xFF14`   | —         |
//! | Caps Lock   | `0x14`     | `0xFFE5`   | `0x39`    |
//! | Left Shift  | `0xA0`     | `0xFFE1`   | `0x38`    |
//! | F15         | `0x7E`     | `0xFFCC`   | `0x71`    |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A key the activity routine can press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKey {
    Escape,
    NumLock,
    ScrollLock,
    CapsLock,
    LeftShift,
    F15,
}

impl ActivityKey {
    pub const ALL: [ActivityKey; 6] = [
        Self::Escape,
        Self::NumLock,
        Self::ScrollLock,
        Self::CapsLock,
        Self::LeftShift,
        Self::F15,
    ];

    /// Windows Virtual-Key code.
    pub fn windows_vk(self) -> u16 {
        match self {
            Self::Escape => 0x1B,
            Self::NumLock => 0x90,
            Self::ScrollLock => 0x91,
            Self::CapsLock => 0x14,
            Self::LeftShift => 0xA0,
            Self::F15 => 0x7E,
        }
    }

    /// X11 KeySym; the server maps it to a keycode at injection time.
    pub fn x11_keysym(self) -> u64 {
        match self {
            Self::Escape => 0xFF1B,
            Self::NumLock => 0xFF7F,
            Self::ScrollLock => 0xFF14,
            Self::CapsLock => 0xFFE5,
            Self::LeftShift => 0xFFE1,
            Self::F15 => 0xFFCC,
        }
    }

    /// macOS virtual key code, or `None` when Apple keyboards have no such key.
    pub fn macos_keycode(self) -> Option<u16> {
        match self {
            Self::Escape => Some(0x35),
            Self::NumLock => Some(0x47),
            Self::ScrollLock => None,
            Self::CapsLock => Some(0x39),
            Self::LeftShift => Some(0x38),
            Self::F15 => Some(0x71),
        }
    }

    /// The snake_case name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Escape => "escape",
            Self::NumLock => "num_lock",
            Self::ScrollLock => "scroll_lock",
            Self::CapsLock => "caps_lock",
            Self::LeftShift => "left_shift",
            Self::F15 => "f15",
        }
    }
}

impl fmt::Display for ActivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_escape_and_num_lock_vk_codes() {
        assert_eq!(ActivityKey::Escape.windows_vk(), 0x1B);
        assert_eq!(ActivityKey::NumLock.windows_vk(), 0x90);
    }

    #[test]
    fn test_codes_are_unique_per_platform() {
        let vks: HashSet<_> = ActivityKey::ALL.iter().map(|k| k.windows_vk()).collect();
        let syms: HashSet<_> = ActivityKey::ALL.iter().map(|k| k.x11_keysym()).collect();
        assert_eq!(vks.len(), ActivityKey::ALL.len());
        assert_eq!(syms.len(), ActivityKey::ALL.len());
    }

    #[test]
    fn test_scroll_lock_has_no_macos_code() {
        assert_eq!(ActivityKey::ScrollLock.macos_keycode(), None);
        assert_eq!(ActivityKey::Escape.macos_keycode(), Some(0x35));
    }

    #[test]
    fn test_name_matches_serde_representation() {
        #[derive(Serialize)]
        struct Wrapper {
            key: ActivityKey,
        }
        for key in ActivityKey::ALL {
            let rendered = toml::to_string(&Wrapper { key }).expect("serialize");
            assert_eq!(rendered.trim(), format!("key = \"{}\"", key.name()));
        }
    }
}
