//! Membership session (`quorum`)
//!
//! Pushed `quorum.notify` messages become [`ClusterView`]s in the
//! caller's mailbox. Other notifications are read and dropped.

use super::{command_error, connect_error, open_session, query_error};
use crate::ipc::IpcClient;
use crate::ipc::protocol::{GetQuorateResult, QuorumNotifyParams, TrackStartParams};
use async_trait::async_trait;
use quorumtool_application::{MembershipChannel, ServiceError, ServiceKind, TrackMode};
use quorumtool_domain::{ClusterView, NodeId, RingId, ViewMailbox};
use serde::de::IgnoredAny;
use std::path::Path;
use std::time::Duration;
use tracing::trace;

const NOTIFY_METHOD: &str = "quorum.notify";
const DISPATCH_OP: &str = "quorum_dispatch";

pub struct IpcMembership {
    client: IpcClient,
}

impl IpcMembership {
    pub async fn connect(socket_dir: &Path, request_timeout: Duration) -> Result<Self, ServiceError> {
        let client = open_session(socket_dir, ServiceKind::Membership, request_timeout)
            .await
            .map_err(|e| connect_error(ServiceKind::Membership, e))?;
        Ok(Self { client })
    }
}

impl From<QuorumNotifyParams> for ClusterView {
    fn from(params: QuorumNotifyParams) -> Self {
        ClusterView::new(
            params.quorate,
            RingId::new(params.ring_id),
            params.members.into_iter().map(NodeId::new).collect(),
        )
    }
}

#[async_trait]
impl MembershipChannel for IpcMembership {
    async fn get_quorate(&mut self) -> Result<bool, ServiceError> {
        self.client
            .request::<GetQuorateResult, _>("quorum.getquorate", ())
            .await
            .map(|result| result.quorate)
            .map_err(|e| query_error("quorum_getquorate", e))
    }

    async fn start_tracking(&mut self, mode: TrackMode) -> Result<(), ServiceError> {
        let params = TrackStartParams {
            flags: mode.as_str(),
        };
        self.client
            .request::<IgnoredAny, _>("quorum.trackstart", params)
            .await
            .map_err(|e| command_error("quorum_trackstart", e))?;
        Ok(())
    }

    async fn dispatch_one(&mut self, sink: &mut ViewMailbox) -> Result<(), ServiceError> {
        let notification = self
            .client
            .next_notification()
            .await
            .map_err(|e| query_error(DISPATCH_OP, e))?;

        match notification {
            Some(n) if n.method == NOTIFY_METHOD => {
                let params: QuorumNotifyParams =
                    serde_json::from_value(n.params.unwrap_or_default()).map_err(|e| {
                        ServiceError::Channel {
                            op: DISPATCH_OP,
                            message: format!("malformed {}: {}", NOTIFY_METHOD, e),
                        }
                    })?;
                trace!("View delivered: ring {}", params.ring_id);
                sink.deliver(params.into());
            }
            Some(n) => trace!("Ignoring notification {}", n.method),
            None => {}
        }
        Ok(())
    }

    async fn stop_tracking(&mut self) -> Result<(), ServiceError> {
        self.client
            .request::<IgnoredAny, _>("quorum.trackstop", ())
            .await
            .map_err(|e| command_error("quorum_trackstop", e))?;
        Ok(())
    }

    fn close(&mut self) {
        self.client.close();
    }
}
