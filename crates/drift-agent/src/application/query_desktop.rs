//! The environment-query boundary: cursor position and screen size.

use drift_core::{Point, ScreenBounds};
use thiserror::Error;

/// Error type for desktop queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesktopError {
    /// The platform API call failed.
    ///
    /// The inner string is a human-readable description of the OS error,
    /// e.g. "XOpenDisplay failed; DISPLAY=<unset>".
    #[error("platform error while querying the desktop: {0}")]
    Platform(String),
}

/// Reads desktop state from the current platform.
#[cfg_attr(test, mockall::automock)]
pub trait DesktopProbe: Send {
    /// Size of the primary screen in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError`] if the size cannot be read or is zero.
    fn screen_bounds(&self) -> Result<ScreenBounds, DesktopError>;

    /// Current cursor position in screen pixels.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError`] if the position cannot be read.
    fn cursor_position(&self) -> Result<Point, DesktopError>;
}

impl<T: DesktopProbe + Sync> DesktopProbe for std::sync::Arc<T> {
    fn screen_bounds(&self) -> Result<ScreenBounds, DesktopError> {
        (**self).screen_bounds()
    }

    fn cursor_position(&self) -> Result<Point, DesktopError> {
        (**self).cursor_position()
    }
}
