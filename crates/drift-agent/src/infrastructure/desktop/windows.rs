//! Windows desktop queries via `GetCursorPos` and `GetSystemMetrics`.

#![cfg(target_os = "windows")]

use drift_core::{Point, ScreenBounds};
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN,
};

use super::checked_bounds;
use crate::application::query_desktop::{DesktopError, DesktopProbe};

/// Windows implementation of [`DesktopProbe`].
#[derive(Debug, Default)]
pub struct WindowsDesktopProbe;

impl WindowsDesktopProbe {
    pub fn new() -> Self {
        Self
    }
}

/// Size of the primary monitor in pixels.
pub(crate) fn primary_screen_bounds() -> Result<ScreenBounds, DesktopError> {
    // SAFETY: GetSystemMetrics is always safe to call
    let (width, height) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
    checked_bounds(width.into(), height.into())
}

impl DesktopProbe for WindowsDesktopProbe {
    fn screen_bounds(&self) -> Result<ScreenBounds, DesktopError> {
        primary_screen_bounds()
    }

    fn cursor_position(&self) -> Result<Point, DesktopError> {
        let mut pos = POINT::default();
        // SAFETY: `pos` is a valid out-pointer for the duration of the call
        unsafe { GetCursorPos(&mut pos) }
            .map_err(|e| DesktopError::Platform(format!("GetCursorPos failed: {e}")))?;
        Ok(Point::new(pos.x, pos.y))
    }
}
