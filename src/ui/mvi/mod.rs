//! Model-View-Intent (MVI) primitives.
//!
//! Every state change in the UI layer goes through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers / render
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, cloned to produce the next one
//! - **Intent**: user action or async completion
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
