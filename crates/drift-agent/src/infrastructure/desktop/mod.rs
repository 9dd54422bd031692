//! Platform-specific desktop queries: cursor position and screen size.
//!
//! # Why is the screen size read only once?
//!
//! The agent picks every destination inside the bounds it saw at startup.
//! Re-querying on every action would let a resolution change mid-run move the
//! targets, but it would also turn every transient query failure into a
//! skipped action.  Reading once keeps the schedule predictable; restart the
//! agent after changing resolution.
//!
//! # Platform implementations
//!
//! Each platform implements [`DesktopProbe`]; the correct one is selected at
//! compile time via `#[cfg(target_os = ...)]` and re-exported as
//! `NativeDesktopProbe`:
//!
//! | Module    | OS      | API used                                         |
//! |-----------|---------|--------------------------------------------------|
//! | `windows` | Windows | `GetCursorPos` + `GetSystemMetrics(SM_CXSCREEN)` |
//! | `linux`   | Linux   | `XQueryPointer` + `XDisplayWidth` (Xlib)         |
//! | `macos`   | macOS   | `CGEventGetLocation` + `CGDisplayBounds`         |
//!
//! [`DesktopProbe`]: crate::application::query_desktop::DesktopProbe

use drift_core::ScreenBounds;

use crate::application::query_desktop::DesktopError;

/// Rejects a zero-sized screen, which would leave no valid destination.
pub(crate) fn checked_bounds(width: i64, height: i64) -> Result<ScreenBounds, DesktopError> {
    if width <= 0 || height <= 0 {
        return Err(DesktopError::Platform(format!(
            "screen reported as {width}x{height}"
        )));
    }
    Ok(ScreenBounds::new(width as u32, height as u32))
}

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsDesktopProbe as NativeDesktopProbe;

// ── Linux implementation ──────────────────────────────────────────────────────

#[cfg(all(target_os = "linux", feature = "xtest"))]
pub mod linux;

#[cfg(all(target_os = "linux", feature = "xtest"))]
pub use linux::XlibDesktopProbe as NativeDesktopProbe;

// ── macOS implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacosDesktopProbe as NativeDesktopProbe;

// ── Tests ─────────────────────────────────────────────────────────────────────
