//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Presentation requests (show / hide a child scene)
/// - Child intents wrapped for a route case
/// - External events (deep links)
///
/// Intents are processed by reducers to mutate state.
pub trait Intent: Debug + Send + 'static {
    /// True when this intent asks the parent scene to dismiss its sender.
    ///
    /// Reducers never act on their own dismiss; the parent observes it
    /// through the wrapped route intent and turns it into a presentation-false.
    fn is_dismiss(&self) -> bool {
        false
    }
}
