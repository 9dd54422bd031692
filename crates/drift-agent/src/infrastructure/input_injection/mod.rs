//! Platform-specific input injection implementations.
//!
//! The correct implementation is selected at compile time via
//! `#[cfg(target_os = ...)]` and re-exported as `NativeInputInjector`.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsInputInjector as NativeInputInjector;

#[cfg(all(target_os = "linux", feature = "xtest"))]
pub mod linux;

#[cfg(all(target_os = "linux", feature = "xtest"))]
pub use linux::XTestInputInjector as NativeInputInjector;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacosInputInjector as NativeInputInjector;
