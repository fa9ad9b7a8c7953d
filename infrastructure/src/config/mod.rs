//! Configuration file loading for debate-arena
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ARENA_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./arena.toml` or `./.arena.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/debate-arena/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDebateConfig, FileLoggingConfig, FileModelsConfig, FileOutputConfig,
    FileProviderConfig,
};
pub use loader::ConfigLoader;
