//! TOML configuration for the driver binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiDefaults, Config};
