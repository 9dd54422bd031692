//! Domain entities for Drift.
//!
//! Pure value types with no infrastructure dependencies: screen geometry and
//! the action schedule.  Both can be compiled and tested on any platform
//! without a display.

/// Points, screen bounds, and the absolute-coordinate scale used by injectors.
pub mod geometry;

/// Randomized, memoryless interval between scheduled actions.
pub mod schedule;
