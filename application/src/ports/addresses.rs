//! Node address ports

use super::error::ServiceError;
use async_trait::async_trait;
use quorumtool_domain::{NameFormat, NodeId};
use std::net::IpAddr;

/// Upper bound on addresses requested per node
pub const INTERFACE_MAX: usize = 8;

/// A session with the cfg service, which knows every node's addresses
#[async_trait]
pub trait AddressDirectory: Send {
    /// Configured addresses of `node_id`, at most `max` of them, in
    /// interface order
    async fn node_addresses(
        &mut self,
        node_id: NodeId,
        max: usize,
    ) -> Result<Vec<IpAddr>, ServiceError>;

    /// Release the session. Calling it twice is a no-op.
    fn close(&mut self);
}

/// Address-to-name resolution, e.g. the system resolver
pub trait NameResolver: Send + Sync {
    /// Turn `addr` into display text.
    ///
    /// [`NameFormat::NumericAddress`] must not perform a lookup.
    fn resolve(&self, addr: IpAddr, format: NameFormat) -> Result<String, String>;
}
