//! Prompt refinement client.
//!
//! Submits a base prompt plus an intent to a refinement service, tracks the
//! request lifecycle, and presents the refined result with copy support.

pub mod catalog;
pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod protocol;
pub mod server;
pub mod ui;
