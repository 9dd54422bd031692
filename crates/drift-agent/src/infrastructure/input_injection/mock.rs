//! Mock input injector for unit and integration testing.
//!
//! # Why a mock injector?
//!
//! The real injectors (`WindowsInputInjector`, `XTestInputInjector`,
//! `MacosInputInjector`) make OS API calls that:
//!
//! - Require a physical desktop session to run.
//! - Actually move the cursor or press keys on the test machine.
//! - Cannot be observed directly from Rust test code.
//!
//! The `MockInputInjector` replaces all OS calls with in-memory recording.
//! Every accepted action is pushed into a `Mutex<Vec<...>>` so that test
//! assertions can inspect exactly what was injected and in what order.
//!
//! # Simulating failures
//!
//! Set `failure` to make every call (or only calls after the first `n`
//! successes) return a chosen [`InjectionError`].  This exercises the
//! non-fatal error paths of the scheduler without a broken OS.

use std::sync::Mutex;

use drift_core::InputAction;

use crate::application::inject_input::{InjectionError, InputInjector};

/// When the mock starts failing, and with what.
#[derive(Debug, Clone)]
pub struct MockFailure {
    /// Number of calls that succeed before failures start.
    pub after: usize,
    pub error: InjectionError,
}

/// A mock injector that records all calls without performing OS API calls.
#[derive(Debug, Default)]
pub struct MockInputInjector {
    /// Every accepted action, in order.
    pub actions: Mutex<Vec<InputAction>>,
    /// Optional failure mode; `None` accepts everything.
    pub failure: Option<MockFailure>,
}

impl MockInputInjector {
    /// Creates a new `MockInputInjector` that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that fails every call with `error`.
    pub fn failing(error: InjectionError) -> Self {
        Self::failing_after(0, error)
    }

    /// Creates a mock that accepts `after` calls and then fails with `error`.
    pub fn failing_after(after: usize, error: InjectionError) -> Self {
        Self {
            actions: Mutex::new(Vec::new()),
            failure: Some(MockFailure { after, error }),
        }
    }

    /// A snapshot of the recorded actions.
    pub fn recorded(&self) -> Vec<InputAction> {
        self.actions.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl InputInjector for MockInputInjector {
    fn inject(&self, action: &InputAction) -> Result<(), InjectionError> {
        let mut actions = self
            .actions
            .lock()
            .map_err(|_| InjectionError::Rejected("mock poisoned".into()))?;
        if let Some(failure) = &self.failure {
            if actions.len() >= failure.after {
                return Err(failure.error.clone());
            }
        }
        actions.push(*action);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::{ActivityKey, Point};

    #[test]
    fn test_mock_records_actions_in_order() {
        let mock = MockInputInjector::new();
        mock.inject(&InputAction::MoveTo(Point::new(1, 2))).unwrap();
        mock.inject(&InputAction::KeyTap(ActivityKey::Escape)).unwrap();
        assert_eq!(
            mock.recorded(),
            vec![
                InputAction::MoveTo(Point::new(1, 2)),
                InputAction::KeyTap(ActivityKey::Escape)
            ]
        );
    }

    #[test]
    fn test_failing_mock_records_nothing() {
        let mock = MockInputInjector::failing(InjectionError::Rejected("denied".into()));
        let result = mock.inject(&InputAction::MoveTo(Point::new(0, 0)));
        assert_eq!(result, Err(InjectionError::Rejected("denied".into())));
        assert!(mock.recorded().is_empty());
    }

    #[test]
    fn test_failing_after_accepts_first_calls() {
        let mock = MockInputInjector::failing_after(
            2,
            InjectionError::Partial {
                requested: 1,
                accepted: 0,
            },
        );
        assert!(mock.inject(&InputAction::MoveTo(Point::new(0, 0))).is_ok());
        assert!(mock.inject(&InputAction::MoveTo(Point::new(1, 0))).is_ok());
        assert!(mock.inject(&InputAction::MoveTo(Point::new(2, 0))).is_err());
        assert_eq!(mock.recorded().len(), 2);
    }
}
