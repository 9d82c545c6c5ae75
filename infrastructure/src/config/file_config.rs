//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use quorumtool_domain::{NameFormat, NodeIdFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default directory holding the daemon's service sockets
pub const DEFAULT_SOCKET_DIR: &str = "/var/run/corosync";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("daemon.request_timeout_ms cannot be 0")]
    InvalidRequestTimeout,

    #[error("daemon.socket_dir cannot be empty")]
    EmptySocketDir,
}

/// Raw `[daemon]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDaemonConfig {
    /// Directory holding `<service>.sock`
    pub socket_dir: PathBuf,
    /// Bound on each request/response round trip
    pub request_timeout_ms: u64,
}

impl Default for FileDaemonConfig {
    fn default() -> Self {
        Self {
            socket_dir: PathBuf::from(DEFAULT_SOCKET_DIR),
            request_timeout_ms: 30_000,
        }
    }
}

impl FileDaemonConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Raw `[wait]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWaitConfig {
    /// Bound on the membership event wait; 0 or absent waits forever
    pub timeout_ms: Option<u64>,
}

impl FileWaitConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

/// Raw `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub nodeid_format: NodeIdFormat,
    pub name_format: NameFormat,
    /// Enable colored diagnostics
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            nodeid_format: NodeIdFormat::Decimal,
            name_format: NameFormat::DisplayName,
            color: true,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub daemon: FileDaemonConfig,
    pub wait: FileWaitConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.daemon.request_timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidRequestTimeout);
        }
        if self.daemon.socket_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptySocketDir);
        }
        Ok(())
    }
}
