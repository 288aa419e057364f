//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (submit, clear) or completions of
/// asynchronous work (a service reply). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
