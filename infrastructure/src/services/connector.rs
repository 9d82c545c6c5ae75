//! Session factory over the daemon's socket directory

use super::{IpcAddressDirectory, IpcConfigStore, IpcMembership, IpcVoteChannel};
use crate::config::FileDaemonConfig;
use async_trait::async_trait;
use quorumtool_application::{
    AddressDirectory, ConfigStore, MembershipChannel, ServiceConnector, ServiceError, VoteChannel,
};
use std::path::PathBuf;
use std::time::Duration;

/// Opens service sessions on `<socket_dir>/<service>.sock`
#[derive(Debug, Clone)]
pub struct IpcServiceConnector {
    socket_dir: PathBuf,
    request_timeout: Duration,
}

impl IpcServiceConnector {
    pub fn new(socket_dir: impl Into<PathBuf>, request_timeout: Duration) -> Self {
        Self {
            socket_dir: socket_dir.into(),
            request_timeout,
        }
    }

    pub fn from_config(config: &FileDaemonConfig) -> Self {
        Self::new(&config.socket_dir, config.request_timeout())
    }
}

#[async_trait]
impl ServiceConnector for IpcServiceConnector {
    async fn connect_config_store(&self) -> Result<Box<dyn ConfigStore>, ServiceError> {
        let store = IpcConfigStore::connect(&self.socket_dir, self.request_timeout).await?;
        Ok(Box::new(store))
    }

    async fn connect_membership(&self) -> Result<Box<dyn MembershipChannel>, ServiceError> {
        let membership = IpcMembership::connect(&self.socket_dir, self.request_timeout).await?;
        Ok(Box::new(membership))
    }

    async fn connect_addresses(&self) -> Result<Box<dyn AddressDirectory>, ServiceError> {
        let directory = IpcAddressDirectory::connect(&self.socket_dir, self.request_timeout).await?;
        Ok(Box::new(directory))
    }

    async fn connect_votes(&self) -> Result<Box<dyn VoteChannel>, ServiceError> {
        let votes = IpcVoteChannel::connect(&self.socket_dir, self.request_timeout).await?;
        Ok(Box::new(votes))
    }
}
