//! # drift-core
//!
//! Pure motion-generation library for the Drift activity agent.
//!
//! This crate has zero dependencies on OS APIs, async runtimes, or the
//! filesystem.  Everything here is deterministic given a random number
//! generator, which callers pass in explicitly.
//!
//! # What does Drift do? (for beginners)
//!
//! Drift keeps a workstation looking "in use" by periodically moving the mouse
//! cursor and tapping a harmless key.  The interesting part is *how* the cursor
//! moves: a straight line at constant speed looks robotic, so the path is a
//! randomly bent curve, sampled with acceleration and deceleration, and
//! wobbled slightly in the middle.
//!
//! This crate is split into:
//!
//! - **`domain`** – Screen geometry (`Point`, `ScreenBounds`, absolute
//!   coordinate normalization) and the memoryless action schedule.
//!
//! - **`motion`** – The trajectory pipeline: easing, cubic Bezier evaluation,
//!   the planner, the jitter post-processor, per-step cadence, and the
//!   `MotionEngine` that chains them.
//!
//! - **`input`** – The platform-independent `InputAction` handed to injectors
//!   and the key code tables for each supported OS.

pub mod domain;
pub mod input;
pub mod motion;

pub use domain::geometry::{Point, ScreenBounds};
pub use domain::schedule::{ScheduleConfig, ScheduleState};
pub use input::action::InputAction;
pub use input::keymap::ActivityKey;
pub use motion::engine::{MotionConfig, MotionEngine, PlannedMotion, Waypoint};
pub use motion::jitter::JitterConfig;
pub use motion::planner::{PlannerConfig, Trajectory, TrajectoryPlanner};
