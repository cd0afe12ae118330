//! Configuration Management
//!
//! Settings are resolved hierarchically:
//! 1. Built-in defaults
//! 2. Global config (<config dir>/goscope/config.toml)
//! 3. Project config (<target>/.goscope.toml)
//! 4. Environment variables (GOSCOPE_*)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::{ConfigLoader, PROJECT_CONFIG_FILE};
pub use types::*;
