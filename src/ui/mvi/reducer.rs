//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
