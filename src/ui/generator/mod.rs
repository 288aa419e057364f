//! Prompt generator feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - request lifecycle state
//! - `intent.rs` - submit / reply / clear actions
//! - `reducer.rs` - pure state transitions
//! - `controller.rs` - async driver that owns the state and the service call

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{PendingGeneration, RequestController, SubmitError};
pub use intent::GeneratorIntent;
pub use reducer::GeneratorReducer;
pub use state::{GeneratorState, RequestState};
