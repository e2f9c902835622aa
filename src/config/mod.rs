//! Configuration module for funcsync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FUNCSYNC_*)
//! 3. Project config (funcsync.toml, or `--config`)
//! 4. User config (~/.config/funcsync/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env, load_layered, user_config_path, with_env_overrides, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, ConfigWarning, PollingConfig};
