//! Owned Xlib display connection shared by the Linux backends.
//!
//! # Why wrap the pointer? (for beginners)
//!
//! `XOpenDisplay` returns a raw `*mut Display` that must be released with
//! `XCloseDisplay` exactly once.  Wrapping it in a struct with a `Drop` impl
//! makes the connection close automatically when the backend is dropped, and
//! keeps every `unsafe` call next to the invariant that justifies it.

use std::ptr::NonNull;

use x11::xlib;

/// An open connection to the X server named by `DISPLAY`.
pub struct XDisplay {
    raw: NonNull<xlib::Display>,
}

// SAFETY: Xlib connections may be moved between threads as long as they are
// not used from two threads at once; every backend owns its connection and
// the agent drives it from a single task.
unsafe impl Send for XDisplay {}

impl XDisplay {
    /// Opens the display named by the `DISPLAY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns a description including the `DISPLAY` value when the server
    /// cannot be reached.
    pub fn open() -> Result<Self, String> {
        // SAFETY: a null name means "use $DISPLAY"; the result is checked below.
        let raw = unsafe { xlib::XOpenDisplay(std::ptr::null()) };
        NonNull::new(raw).map(|raw| Self { raw }).ok_or_else(|| {
            let display_env = std::env::var("DISPLAY").unwrap_or_else(|_| "<unset>".to_string());
            format!("XOpenDisplay failed; DISPLAY={display_env}")
        })
    }

    /// The raw pointer, valid for as long as `self` lives.
    pub fn as_ptr(&self) -> *mut xlib::Display {
        self.raw.as_ptr()
    }

    /// Flushes queued requests to the server.
    pub fn flush(&self) {
        // SAFETY: the pointer is a live connection owned by `self`.
        unsafe {
            xlib::XFlush(self.as_ptr());
        }
    }
}

impl Drop for XDisplay {
    fn drop(&mut self) {
        // SAFETY: opened in `open`, closed exactly once here.
        unsafe {
            xlib::XCloseDisplay(self.as_ptr());
        }
    }
}
