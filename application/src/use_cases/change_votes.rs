//! Vote change use cases
//!
//! Both commands go through the vote session. The session opened at
//! startup is reused; when none is open a fresh one is connected.

use crate::ports::connector::ServiceConnector;
use crate::ports::error::ServiceError;
use crate::ports::votes::VoteChannel;
use crate::use_cases::sessions::ClusterSessions;
use crate::use_cases::shared::log_failure;
use quorumtool_domain::NodeId;
use tracing::info;

/// Use case for `-v` and `-e`
pub struct ChangeVotesUseCase<'a> {
    connector: &'a dyn ServiceConnector,
    sessions: &'a mut ClusterSessions,
}

impl<'a> ChangeVotesUseCase<'a> {
    pub fn new(connector: &'a dyn ServiceConnector, sessions: &'a mut ClusterSessions) -> Self {
        Self {
            connector,
            sessions,
        }
    }

    pub async fn set_node_votes(&mut self, node_id: NodeId, votes: u32) -> Result<(), ServiceError> {
        let channel = self.channel().await?;
        channel
            .set_node_votes(node_id, votes)
            .await
            .inspect_err(|e| log_failure("votequorum_setvotes", e))?;
        info!("Node {} now has {} votes", node_id, votes);
        Ok(())
    }

    pub async fn set_expected_votes(&mut self, expected: u32) -> Result<(), ServiceError> {
        let channel = self.channel().await?;
        channel
            .set_expected_votes(expected)
            .await
            .inspect_err(|e| log_failure("votequorum_setexpected", e))?;
        info!("Expected votes set to {}", expected);
        Ok(())
    }

    async fn channel(&mut self) -> Result<&mut (dyn VoteChannel + 'static), ServiceError> {
        if self.sessions.votes.is_none() {
            let votes = self
                .connector
                .connect_votes()
                .await
                .inspect_err(|e| log_failure("votequorum_initialize", e))?;
            self.sessions.votes = Some(votes);
        }
        self.sessions
            .votes
            .as_deref_mut()
            .ok_or(ServiceError::NotConfigured)
    }
}
