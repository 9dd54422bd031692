//! Linux input injection via the X11 XTest extension.
//!
//! # What is XTest? (for beginners)
//!
//! XTest is an X server extension originally meant for automated UI testing.
//! `XTestFakeMotionEvent` and `XTestFakeKeyEvent` ask the server to behave as
//! if the pointer moved or a key changed state; applications receive ordinary
//! input events.  Requests are buffered by Xlib, so each action ends with an
//! `XFlush` to push it to the server immediately.
//!
//! Key taps go through `XKeysymToKeycode`: the keysym (e.g. `XK_Num_Lock`) is
//! layout independent, the keycode is whatever the current keyboard map uses.

#![cfg(target_os = "linux")]

use std::os::raw::c_int;

use drift_core::{ActivityKey, InputAction, Point};
use x11::{xlib, xtest};

use crate::application::inject_input::{InjectionError, InputInjector};
use crate::infrastructure::xdisplay::XDisplay;

/// XTest implementation of [`InputInjector`].
pub struct XTestInputInjector {
    display: XDisplay,
    screen: c_int,
}

impl XTestInputInjector {
    /// Opens the default display and checks that XTest is available.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Rejected`] if the display cannot be opened or
    /// the server lacks the XTest extension.
    pub fn new() -> Result<Self, InjectionError> {
        let display = XDisplay::open().map_err(InjectionError::Rejected)?;

        let (mut event_base, mut error_base, mut major, mut minor) = (0, 0, 0, 0);
        // SAFETY: the display is open and all out-pointers are valid locals.
        let has_xtest = unsafe {
            xtest::XTestQueryExtension(
                display.as_ptr(),
                &mut event_base,
                &mut error_base,
                &mut major,
                &mut minor,
            )
        };
        if has_xtest == 0 {
            return Err(InjectionError::Rejected(
                "X server does not support the XTest extension".to_string(),
            ));
        }

        // SAFETY: the display is open.
        let screen = unsafe { xlib::XDefaultScreen(display.as_ptr()) };
        tracing::debug!("XTest {major}.{minor} available on screen {screen}");
        Ok(Self { display, screen })
    }

    fn move_to(&self, point: Point, requested: u32) -> Result<(), InjectionError> {
        // SAFETY: the display is open; coordinates are plain integers.
        let ok = unsafe {
            xtest::XTestFakeMotionEvent(self.display.as_ptr(), self.screen, point.x, point.y, 0)
        };
        self.display.flush();
        InjectionError::check_accepted(requested, (ok != 0) as u32, || {
            "XTestFakeMotionEvent failed".to_string()
        })
    }

    fn tap(&self, key: ActivityKey, requested: u32) -> Result<(), InjectionError> {
        // SAFETY: the display is open.
        let keycode = unsafe { xlib::XKeysymToKeycode(self.display.as_ptr(), key.x11_keysym()) };
        if keycode == 0 {
            return Err(InjectionError::Rejected(format!(
                "no keycode mapped for {key}"
            )));
        }

        let mut accepted = 0;
        for is_press in [xlib::True, xlib::False] {
            // SAFETY: the display is open and `keycode` came from the server.
            let ok = unsafe {
                xtest::XTestFakeKeyEvent(self.display.as_ptr(), keycode as u32, is_press, 0)
            };
            if ok != 0 {
                accepted += 1;
            }
        }
        self.display.flush();
        InjectionError::check_accepted(requested, accepted, || {
            format!("XTestFakeKeyEvent failed for {key}")
        })
    }
}

impl InputInjector for XTestInputInjector {
    fn inject(&self, action: &InputAction) -> Result<(), InjectionError> {
        let requested = action.event_count();
        match action {
            InputAction::MoveTo(point) => self.move_to(*point, requested),
            InputAction::KeyTap(key) => self.tap(*key, requested),
        }
    }
}
