//! Windows input injection via the SendInput API.
//!
//! Cursor moves are sent as a single absolute `MOUSEINPUT`; key taps are sent
//! as a down/up `KEYBDINPUT` pair in one `SendInput` call so the OS reports how
//! many of the two it accepted.

#![cfg(target_os = "windows")]

use drift_core::{ActivityKey, InputAction, Point, ScreenBounds};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_MOVE, MOUSEINPUT,
    VIRTUAL_KEY,
};

use crate::application::inject_input::{InjectionError, InputInjector};
use crate::infrastructure::desktop::windows::primary_screen_bounds;

/// Windows implementation of [`InputInjector`] using SendInput.
pub struct WindowsInputInjector {
    bounds: ScreenBounds,
}

impl WindowsInputInjector {
    /// Creates an injector that normalizes against the primary screen size.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Rejected`] if the screen size reads as zero.
    pub fn new() -> Result<Self, InjectionError> {
        let bounds = primary_screen_bounds().map_err(|e| InjectionError::Rejected(e.to_string()))?;
        Ok(Self { bounds })
    }
}

impl InputInjector for WindowsInputInjector {
    fn inject(&self, action: &InputAction) -> Result<(), InjectionError> {
        send(action.event_count(), &self.native_inputs(action))
    }
}

impl WindowsInputInjector {
    /// The `INPUT` records for one action, in submission order.
    fn native_inputs(&self, action: &InputAction) -> Vec<INPUT> {
        match action {
            InputAction::MoveTo(point) => vec![self.mouse_move(*point)],
            InputAction::KeyTap(key) => vec![key_input(*key, false), key_input(*key, true)],
        }
    }

    fn mouse_move(&self, point: Point) -> INPUT {
        let (dx, dy) = self.bounds.to_absolute(point);
        INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx,
                    dy,
                    mouseData: 0,
                    // MOUSEEVENTF_ABSOLUTE uses normalized coords [0, 65535]
                    dwFlags: MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_MOVE,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn key_input(key: ActivityKey, key_up: bool) -> INPUT {
    let mut flags = KEYBD_EVENT_FLAGS::default();
    if key_up {
        flags |= KEYEVENTF_KEYUP;
    }
    // NumLock lives on the extended key block.
    if key == ActivityKey::NumLock {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }

    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(key.windows_vk()),
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn send(requested: u32, inputs: &[INPUT]) -> Result<(), InjectionError> {
    // SAFETY: every element is a fully initialised INPUT on the caller's stack
    let accepted = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
    InjectionError::check_accepted(requested, accepted, || {
        windows::core::Error::from_win32().to_string()
    })
}
