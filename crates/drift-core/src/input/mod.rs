//! Platform-independent input actions and key code tables.
//!
//! The agent never builds OS input records directly.  It produces
//! [`action::InputAction`] values, and each injector backend translates them
//! into its native format (`INPUT` structures on Windows, XTest calls on
//! Linux, `CGEvent`s on macOS) at the last moment.

pub mod action;
pub mod keymap;
