//! The injector boundary: the trait every OS input backend implements.
//!
//! The use cases in this layer hand [`InputAction`]s to an [`InputInjector`]
//! trait object.  The platform-specific implementations live in the
//! infrastructure layer and translate each action into native input records.

use drift_core::InputAction;
use thiserror::Error;

/// Why an injection call did not fully succeed.
///
/// Both variants are non-fatal: the scheduler logs them and moves on to the
/// next scheduled action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectionError {
    /// The OS accepted fewer events than were submitted.
    #[error("partial injection: {accepted} of {requested} events accepted")]
    Partial { requested: u32, accepted: u32 },

    /// The OS refused the call outright (permissions, blocked desktop,
    /// missing extension) or the action cannot be expressed on this platform.
    #[error("injection rejected: {0}")]
    Rejected(String),
}

impl InjectionError {
    /// Converts an accepted-event count into a result.
    ///
    /// `reject_reason` is only evaluated when nothing was accepted, so callers
    /// can defer an expensive `GetLastError`-style lookup.
    pub fn check_accepted<F>(requested: u32, accepted: u32, reject_reason: F) -> Result<(), Self>
    where
        F: FnOnce() -> String,
    {
        if accepted >= requested {
            Ok(())
        } else if accepted == 0 {
            Err(Self::Rejected(reject_reason()))
        } else {
            Err(Self::Partial {
                requested,
                accepted,
            })
        }
    }
}

/// Platform-agnostic input injection trait.
///
/// Each supported OS provides an implementation in the infrastructure layer.
/// Calls are synchronous; the caller owns all timing.
pub trait InputInjector: Send {
    /// Injects one action.  `MoveTo` coordinates are absolute screen pixels.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`] if the OS did not accept every event.
    fn inject(&self, action: &InputAction) -> Result<(), InjectionError>;
}

impl<T: InputInjector + Sync> InputInjector for std::sync::Arc<T> {
    fn inject(&self, action: &InputAction) -> Result<(), InjectionError> {
        (**self).inject(action)
    }
}
