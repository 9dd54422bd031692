//! Linux desktop queries via Xlib.
//!
//! The pointer position comes from `XQueryPointer` on the root window of the
//! default screen; the screen size from `XDisplayWidth` / `XDisplayHeight`.
//! Without Xrandr the default X screen spans every attached monitor.

#![cfg(target_os = "linux")]

use std::os::raw::{c_int, c_uint};

use drift_core::{Point, ScreenBounds};
use x11::xlib;

use super::checked_bounds;
use crate::application::query_desktop::{DesktopError, DesktopProbe};
use crate::infrastructure::xdisplay::XDisplay;

/// Xlib implementation of [`DesktopProbe`].
pub struct XlibDesktopProbe {
    display: XDisplay,
}

impl XlibDesktopProbe {
    /// Opens the default display.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::Platform`] if `DISPLAY` is unset or unreachable.
    pub fn new() -> Result<Self, DesktopError> {
        let display = XDisplay::open().map_err(DesktopError::Platform)?;
        Ok(Self { display })
    }
}

impl DesktopProbe for XlibDesktopProbe {
    fn screen_bounds(&self) -> Result<ScreenBounds, DesktopError> {
        let display = self.display.as_ptr();
        // SAFETY: the display is open; the screen number comes from the server.
        let (width, height) = unsafe {
            let screen = xlib::XDefaultScreen(display);
            (
                xlib::XDisplayWidth(display, screen),
                xlib::XDisplayHeight(display, screen),
            )
        };
        checked_bounds(width.into(), height.into())
    }

    fn cursor_position(&self) -> Result<Point, DesktopError> {
        let display = self.display.as_ptr();
        let mut root_return: xlib::Window = 0;
        let mut child_return: xlib::Window = 0;
        let (mut root_x, mut root_y, mut win_x, mut win_y): (c_int, c_int, c_int, c_int) =
            (0, 0, 0, 0);
        let mut mask: c_uint = 0;

        // SAFETY: the display is open and every out-pointer is a valid local.
        let on_screen = unsafe {
            let root = xlib::XDefaultRootWindow(display);
            xlib::XQueryPointer(
                display,
                root,
                &mut root_return,
                &mut child_return,
                &mut root_x,
                &mut root_y,
                &mut win_x,
                &mut win_y,
                &mut mask,
            )
        };
        if on_screen == xlib::False {
            return Err(DesktopError::Platform(
                "pointer is not on the default screen".to_string(),
            ));
        }
        Ok(Point::new(root_x, root_y))
    }
}
