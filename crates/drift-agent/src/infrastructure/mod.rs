//! Infrastructure layer for the activity agent.
//!
//! Contains OS-facing adapters and configuration storage.
//!
//! **Dependency rule**: this layer may depend on `application` and `drift_core`,
//! but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`input_injection`** – OS-specific implementations of `InputInjector`.
//!   The correct implementation is selected at compile time using
//!   `#[cfg(target_os)]` and re-exported as `NativeInputInjector`.
//!   A `MockInputInjector` is also provided for tests.
//!
//! - **`desktop`** – OS-specific implementations of `DesktopProbe` (cursor
//!   position and screen size), re-exported as `NativeDesktopProbe`.
//!
//! - **`simulated`** – An in-memory desktop that implements both traits; used
//!   by `--dry-run` and by integration tests.
//!
//! - **`storage`** – TOML configuration file loading and saving.

pub mod desktop;
pub mod input_injection;
pub mod simulated;
pub mod storage;

#[cfg(all(target_os = "linux", feature = "xtest"))]
pub mod xdisplay;
