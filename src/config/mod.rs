//! Configuration loading.
//!
//! Settings live in a TOML file under the user's config directory. Every
//! section is optional; missing keys take their defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, OutputConfig, ServerConfig, ServiceConfig};
