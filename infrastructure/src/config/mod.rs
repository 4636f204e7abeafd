//! Configuration file loading for expert-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml` or `./.council.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/expert-council/config.toml`
//! 5. Fallback: `~/.config/expert-council/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileCoordinationConfig, FileOutputConfig, FileSearchConfig, FileSourcesConfig,
    SearchBackend,
};
pub use loader::ConfigLoader;
