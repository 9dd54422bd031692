//! Application layer use cases for the activity agent.
//!
//! # What use cases does the agent have?
//!
//! - **`inject_input`** – The [`inject_input::InputInjector`] trait that every
//!   OS backend implements, plus the boundary error type.  The use cases only
//!   ever talk to this trait, never to an OS API.
//!
//! - **`query_desktop`** – The [`query_desktop::DesktopProbe`] trait for reading
//!   the cursor position and the screen size.
//!
//! - **`playback`** – Plays a planned motion: inject a point, wait its delay,
//!   repeat, stopping early only when shutdown is requested.
//!
//! - **`activity`** – The scheduler: waits a random interval, performs one
//!   activity action (move + key taps), redraws the interval, forever.
//!
//! - **`shutdown`** – A flag-plus-notification signal shared between the
//!   Ctrl-C handler and the scheduler.

pub mod activity;
pub mod inject_input;
pub mod playback;
pub mod query_desktop;
pub mod shutdown;
