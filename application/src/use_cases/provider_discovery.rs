//! Provider discovery
//!
//! Learns the active quorum provider from the configuration store.

use crate::ports::config_store::ConfigStore;
use crate::ports::error::ServiceError;
use quorumtool_domain::ProviderIdentity;
use tracing::debug;

/// Object holding the provider setting
pub const PROVIDER_OBJECT: &str = "quorum";
/// Key naming the provider under [`PROVIDER_OBJECT`]
pub const PROVIDER_KEY: &str = "provider";

/// Reads the provider setting through a borrowed config store session
pub struct ProviderDiscovery<'a> {
    store: &'a mut dyn ConfigStore,
}

impl<'a> ProviderDiscovery<'a> {
    pub fn new(store: &'a mut dyn ConfigStore) -> Self {
        Self { store }
    }

    /// Name of the active quorum provider.
    ///
    /// A missing object or key, and an unreachable store, all report
    /// [`ServiceError::NotConfigured`]. Overlong values are truncated.
    pub async fn quorum_provider_name(&mut self) -> Result<ProviderIdentity, ServiceError> {
        match self.store.key_get(PROVIDER_OBJECT, PROVIDER_KEY).await {
            Ok(Some(raw)) => {
                let identity = ProviderIdentity::from_raw(&raw);
                debug!("Quorum provider: {}", identity);
                Ok(identity)
            }
            Ok(None) => {
                debug!("{}.{} not set", PROVIDER_OBJECT, PROVIDER_KEY);
                Err(ServiceError::NotConfigured)
            }
            Err(e) => {
                debug!("Provider lookup failed: {}", e);
                Err(ServiceError::NotConfigured)
            }
        }
    }

    /// True iff the active provider is exactly the vote provider
    pub async fn using_vote_provider(&mut self) -> Result<bool, ServiceError> {
        Ok(self.quorum_provider_name().await?.is_vote_provider())
    }
}
