//! Configuration file loading for quorumtool
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUORUMTOOL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quorumtool.toml` or `./.quorumtool.toml`
//! 4. Global: `$XDG_CONFIG_HOME/quorumtool/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_SOCKET_DIR, FileConfig, FileDaemonConfig, FileOutputConfig,
    FileWaitConfig,
};
pub use loader::ConfigLoader;
