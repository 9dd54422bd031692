//! An in-memory desktop used by `--dry-run` and by integration tests.
//!
//! [`SimulatedDesktop`] implements both boundaries at once: injected
//! `MoveTo` actions update a shared cursor, and `cursor_position` reads it
//! back, so consecutive motions chain exactly as they would on a real screen.
//! Every action is logged at `info` level and kept in an in-memory history.

use std::sync::{Arc, Mutex, MutexGuard};

use drift_core::{InputAction, Point, ScreenBounds};
use tracing::{info, trace};

use crate::application::{
    inject_input::{InjectionError, InputInjector},
    query_desktop::{DesktopError, DesktopProbe},
};

#[derive(Debug)]
struct State {
    cursor: Point,
    history: Vec<InputAction>,
}

/// A fake screen with a cursor.  Clones share the same state.
#[derive(Debug, Clone)]
pub struct SimulatedDesktop {
    bounds: ScreenBounds,
    state: Arc<Mutex<State>>,
}

impl SimulatedDesktop {
    /// Creates a desktop of the given size with the cursor at `cursor`.
    pub fn new(bounds: ScreenBounds, cursor: Point) -> Self {
        Self {
            bounds,
            state: Arc::new(Mutex::new(State {
                cursor,
                history: Vec::new(),
            })),
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Point {
        self.lock().cursor
    }

    /// Every action injected so far, in order.
    pub fn history(&self) -> Vec<InputAction> {
        self.lock().history.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock cannot leave `State` inconsistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl InputInjector for SimulatedDesktop {
    fn inject(&self, action: &InputAction) -> Result<(), InjectionError> {
        let mut state = self.lock();
        match action {
            InputAction::MoveTo(point) => {
                trace!("[dry-run] {action}");
                state.cursor = *point;
            }
            InputAction::KeyTap(_) => info!("[dry-run] {action}"),
        }
        state.history.push(*action);
        Ok(())
    }
}

impl DesktopProbe for SimulatedDesktop {
    fn screen_bounds(&self) -> Result<ScreenBounds, DesktopError> {
        Ok(self.bounds)
    }

    fn cursor_position(&self) -> Result<Point, DesktopError> {
        Ok(self.cursor())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
