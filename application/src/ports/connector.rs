//! Session factory port

use super::addresses::AddressDirectory;
use super::config_store::ConfigStore;
use super::error::ServiceError;
use super::membership::MembershipChannel;
use super::votes::VoteChannel;
use async_trait::async_trait;

/// Opens independent sessions with each daemon service.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ServiceConnector: Send + Sync {
    async fn connect_config_store(&self) -> Result<Box<dyn ConfigStore>, ServiceError>;

    async fn connect_membership(&self) -> Result<Box<dyn MembershipChannel>, ServiceError>;

    async fn connect_addresses(&self) -> Result<Box<dyn AddressDirectory>, ServiceError>;

    /// Fails with [`ServiceError::NotVoteProvider`] when the daemon refuses
    /// the session because the vote provider is not active.
    async fn connect_votes(&self) -> Result<Box<dyn VoteChannel>, ServiceError>;
}
