//! The trajectory pipeline.
//!
//! ```text
//! start, target
//!      │
//!      ▼
//! planner   ── random control points, step count = base_steps × complexity,
//!      │       samples the Bezier curve at eased progress values
//!      ▼
//! jitter    ── bounded oscillating noise, strongest mid-motion
//!      │
//!      ▼
//! cadence   ── per-step delay drawn for each point
//!      │
//!      ▼
//! Vec<Waypoint>  (handed to the playback driver)
//! ```
//!
//! Every stage is a pure function of its inputs plus draws from the caller's
//! random number generator.  None of them can fail.

pub mod bezier;
pub mod cadence;
pub mod easing;
pub mod engine;
pub mod jitter;
pub mod planner;
