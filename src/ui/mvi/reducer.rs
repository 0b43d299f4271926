//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It mutates
/// the slice of the tree it is handed and never performs I/O; anything the
/// runtime should do afterwards is described by the returned [`Effect`].
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent against `state`.
    fn reduce(state: &mut Self::State, intent: Self::Intent) -> Effect<Self::Intent>;
}
