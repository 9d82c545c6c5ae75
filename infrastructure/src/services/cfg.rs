//! Address directory session (`cfg`)

use super::{connect_error, open_session, query_error};
use crate::ipc::IpcClient;
use crate::ipc::protocol::{GetNodeAddrsParams, GetNodeAddrsResult};
use async_trait::async_trait;
use quorumtool_application::{AddressDirectory, ServiceError, ServiceKind};
use quorumtool_domain::NodeId;
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

pub struct IpcAddressDirectory {
    client: IpcClient,
}

impl IpcAddressDirectory {
    pub async fn connect(socket_dir: &Path, request_timeout: Duration) -> Result<Self, ServiceError> {
        let client = open_session(socket_dir, ServiceKind::Cfg, request_timeout)
            .await
            .map_err(|e| connect_error(ServiceKind::Cfg, e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AddressDirectory for IpcAddressDirectory {
    /// Addresses in interface order. Entries that are not IP addresses
    /// are skipped.
    async fn node_addresses(
        &mut self,
        node_id: NodeId,
        max: usize,
    ) -> Result<Vec<IpAddr>, ServiceError> {
        let params = GetNodeAddrsParams {
            nodeid: node_id.get(),
            max_addrs: max,
        };
        let result: GetNodeAddrsResult = self
            .client
            .request("cfg.get_node_addrs", params)
            .await
            .map_err(|e| query_error("corosync_cfg_get_node_addrs", e))?;

        Ok(result
            .addrs
            .iter()
            .filter_map(|raw| match raw.parse::<IpAddr>() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    warn!("Node {} has a non-IP address {:?}", node_id, raw);
                    None
                }
            })
            .take(max)
            .collect())
    }

    fn close(&mut self) {
        self.client.close();
    }
}
