//! Output panel feature module.
//!
//! - `state.rs` - statistics, copy feedback and the render view
//! - `presenter.rs` - result presentation and the copy/reset timer

mod presenter;
mod state;

pub use presenter::{OutputPresenter, DEFAULT_COPY_RESET};
pub use state::{OutputView, PromptStats};
