//! Infrastructure layer for quorumtool
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: daemon sessions over Unix sockets, the system name
//! resolver, and configuration file loading.

pub mod config;
pub mod ipc;
pub mod resolver;
pub mod services;

#[cfg(test)]
pub(crate) mod test_daemon;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDaemonConfig, FileOutputConfig,
    FileWaitConfig,
};
pub use ipc::{IpcClient, IpcError};
pub use resolver::SystemNameResolver;
pub use services::{
    IpcAddressDirectory, IpcConfigStore, IpcMembership, IpcServiceConnector, IpcVoteChannel,
};
