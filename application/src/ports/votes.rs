//! Vote query/command port
//!
//! Every call is independent and synchronous from the caller's side.
//! Repeating a set with the same value is a no-op at the daemon.

use super::error::ServiceError;
use async_trait::async_trait;
use quorumtool_domain::{NodeId, NodeVoteInfo};

/// A session with the vote service
#[async_trait]
pub trait VoteChannel: Send {
    /// Vote info for `node_id`; [`NodeId::LOCAL`] asks about this node
    async fn get_node_vote_info(&mut self, node_id: NodeId) -> Result<NodeVoteInfo, ServiceError>;

    async fn set_node_votes(&mut self, node_id: NodeId, votes: u32) -> Result<(), ServiceError>;

    async fn set_expected_votes(&mut self, expected: u32) -> Result<(), ServiceError>;

    /// Release the session. Calling it twice is a no-op.
    fn close(&mut self);
}
