//! Vote session (`votequorum`)
//!
//! The service refuses `initialize` with `NOT_SUPPORTED` when it is not
//! the active quorum provider.

use super::{command_error, connect_error, open_session, query_error};
use crate::ipc::protocol::{
    GetInfoParams, GetInfoResult, SetExpectedParams, SetVotesParams, status,
};
use crate::ipc::{IpcClient, IpcError};
use async_trait::async_trait;
use quorumtool_application::{ServiceError, ServiceKind, VoteChannel};
use quorumtool_domain::{NodeId, NodeVoteInfo, VoteFlag, VoteFlags};
use serde::de::IgnoredAny;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub struct IpcVoteChannel {
    client: IpcClient,
}

impl IpcVoteChannel {
    pub async fn connect(socket_dir: &Path, request_timeout: Duration) -> Result<Self, ServiceError> {
        match open_session(socket_dir, ServiceKind::Votes, request_timeout).await {
            Ok(client) => Ok(Self { client }),
            Err(IpcError::Rpc {
                code: status::NOT_SUPPORTED,
                ..
            }) => Err(ServiceError::NotVoteProvider {
                code: status::NOT_SUPPORTED,
            }),
            Err(e) => Err(connect_error(ServiceKind::Votes, e)),
        }
    }
}

impl From<GetInfoResult> for NodeVoteInfo {
    fn from(result: GetInfoResult) -> Self {
        let flags: VoteFlags = result
            .flags
            .iter()
            .filter_map(|raw| {
                raw.parse::<VoteFlag>()
                    .inspect_err(|e| debug!("{}", e))
                    .ok()
            })
            .collect();
        NodeVoteInfo {
            node_votes: result.node_votes,
            node_expected_votes: result.node_expected_votes,
            highest_expected: result.highest_expected,
            total_votes: result.total_votes,
            quorum_threshold: result.quorum,
            flags,
        }
    }
}

#[async_trait]
impl VoteChannel for IpcVoteChannel {
    async fn get_node_vote_info(&mut self, node_id: NodeId) -> Result<NodeVoteInfo, ServiceError> {
        let params = GetInfoParams {
            nodeid: node_id.get(),
        };
        self.client
            .request::<GetInfoResult, _>("votequorum.getinfo", params)
            .await
            .map(NodeVoteInfo::from)
            .map_err(|e| query_error("votequorum_getinfo", e))
    }

    async fn set_node_votes(&mut self, node_id: NodeId, votes: u32) -> Result<(), ServiceError> {
        let params = SetVotesParams {
            nodeid: node_id.get(),
            votes,
        };
        self.client
            .request::<IgnoredAny, _>("votequorum.setvotes", params)
            .await
            .map_err(|e| command_error("votequorum_setvotes", e))?;
        Ok(())
    }

    async fn set_expected_votes(&mut self, expected: u32) -> Result<(), ServiceError> {
        let params = SetExpectedParams {
            expected_votes: expected,
        };
        self.client
            .request::<IgnoredAny, _>("votequorum.setexpected", params)
            .await
            .map_err(|e| command_error("votequorum_setexpected", e))?;
        Ok(())
    }

    fn close(&mut self) {
        self.client.close();
    }
}
