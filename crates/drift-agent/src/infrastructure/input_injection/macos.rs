//! macOS CoreGraphics input injection.
//!
//! Uses `CGEvent::new_mouse_event`, `CGEvent::new_keyboard_event`, and
//! `CGEvent::post` to inject events at the HID event tap.
//!
//! # Accessibility permission
//!
//! Posting at the HID tap requires the **Accessibility** permission in System
//! Settings → Privacy & Security → Accessibility.  Without it the post silently
//! does nothing; there is no error to surface.
//!
//! # Coordinates
//!
//! `CGEvent` mouse positions use the global display space in points, origin at
//! the top-left of the main display, the same convention as [`Point`].

#![cfg(target_os = "macos")]

use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;
use drift_core::{ActivityKey, InputAction, Point};

use crate::application::inject_input::{InjectionError, InputInjector};

/// macOS implementation of [`InputInjector`].
///
/// Holds no CoreFoundation objects (they are not `Send`); an event source is
/// created per call.
#[derive(Debug, Default)]
pub struct MacosInputInjector;

impl MacosInputInjector {
    pub fn new() -> Self {
        Self
    }
}

fn event_source() -> Result<CGEventSource, InjectionError> {
    CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|()| InjectionError::Rejected("CGEventSourceCreate failed".to_string()))
}

fn move_to(point: Point) -> Result<(), InjectionError> {
    let source = event_source()?;
    let event = CGEvent::new_mouse_event(
        source,
        CGEventType::MouseMoved,
        CGPoint::new(point.x as f64, point.y as f64),
        CGMouseButton::Left,
    )
    .map_err(|()| InjectionError::Rejected("CGEventCreateMouseEvent failed".to_string()))?;
    event.post(CGEventTapLocation::HID);
    Ok(())
}

fn tap(key: ActivityKey, requested: u32) -> Result<(), InjectionError> {
    let keycode = key
        .macos_keycode()
        .ok_or_else(|| InjectionError::Rejected(format!("{key} has no macOS key code")))?;

    let mut accepted = 0;
    for key_down in [true, false] {
        let source = event_source()?;
        if let Ok(event) = CGEvent::new_keyboard_event(source, keycode, key_down) {
            event.post(CGEventTapLocation::HID);
            accepted += 1;
        }
    }
    InjectionError::check_accepted(requested, accepted, || {
        format!("CGEventCreateKeyboardEvent failed for {key}")
    })
}

impl InputInjector for MacosInputInjector {
    fn inject(&self, action: &InputAction) -> Result<(), InjectionError> {
        match action {
            InputAction::MoveTo(point) => move_to(*point),
            InputAction::KeyTap(key) => tap(*key, action.event_count()),
        }
    }
}
