//! macOS desktop queries via Core Graphics.
//!
//! The cursor position is the location of a freshly created null event; the
//! screen size is the main display's bounds in points.  Both use the global
//! top-left origin that `CGEvent` mouse positions use, so no Y flip is needed.

#![cfg(target_os = "macos")]

use core_graphics::display::CGDisplay;
use core_graphics::event::CGEvent;
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use drift_core::{Point, ScreenBounds};

use super::checked_bounds;
use crate::application::query_desktop::{DesktopError, DesktopProbe};

/// macOS implementation of [`DesktopProbe`].
#[derive(Debug, Default)]
pub struct MacosDesktopProbe;

impl MacosDesktopProbe {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopProbe for MacosDesktopProbe {
    fn screen_bounds(&self) -> Result<ScreenBounds, DesktopError> {
        let bounds = CGDisplay::main().bounds();
        checked_bounds(bounds.size.width as i64, bounds.size.height as i64)
    }

    fn cursor_position(&self) -> Result<Point, DesktopError> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|()| DesktopError::Platform("CGEventSourceCreate failed".to_string()))?;
        let event = CGEvent::new(source)
            .map_err(|()| DesktopError::Platform("CGEventCreate failed".to_string()))?;
        let location = event.location();
        Ok(Point::new(location.x as i32, location.y as i32))
    }
}
