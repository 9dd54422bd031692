//! drift-agent library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does drift-agent do? (for beginners)
//!
//! The agent is a long-running process that, every 10–30 seconds:
//!
//! 1. Reads the current cursor position.
//! 2. Picks a random point on the screen.
//! 3. Asks `drift_core::MotionEngine` for a curved, eased, jittered path
//!    between the two, with a small pause attached to every point.
//! 4. Feeds the points one by one to the platform input API (`SendInput` on
//!    Windows, XTest on Linux, CoreGraphics on macOS), sleeping in between.
//! 5. Taps Escape and Num Lock.
//!
//! Injection failures are logged and the agent carries on with the next
//! scheduled action.

/// Application layer: use cases and the traits OS adapters implement.
pub mod application;

/// Infrastructure layer: OS adapters and configuration storage.
pub mod infrastructure;
