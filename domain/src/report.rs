//! Reports built by the status aggregator
//!
//! Reports are constructed once per invocation, rendered, and dropped.

use crate::cluster::node::{NodeId, RingId};
use crate::provider::QuorumType;
use crate::votes::NodeVoteInfo;
use serde::Serialize;

/// Vote count shown when a per-node vote query fails
pub const UNKNOWN_VOTES: i32 = -1;

/// Vote block of a status report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum VoteSummary {
    /// No vote session is open (the vote provider is not active)
    Inactive,
    Available(NodeVoteInfo),
    /// The local vote query failed with the given daemon status code
    Failed { code: Option<i64> },
}

/// Result of the show-status command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Taken from the dedicated quorate query, never from the view
    pub quorate: bool,
    pub ring_id: RingId,
    pub node_count: usize,
    pub quorum_type: QuorumType,
    pub votes: VoteSummary,
}

impl StatusReport {
    /// Status code of a failed vote query, if any
    pub fn vote_failure(&self) -> Option<Option<i64>> {
        match &self.votes {
            VoteSummary::Failed { code } => Some(*code),
            _ => None,
        }
    }
}

/// One row of the node listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRow {
    pub node_id: NodeId,
    /// `None` when no vote session is open, [`UNKNOWN_VOTES`] on query failure
    pub votes: Option<i32>,
    /// Empty when the address could not be resolved
    pub name: String,
}

/// Result of the show-nodes command, rows in delivered member order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeListing {
    pub with_votes: bool,
    pub rows: Vec<NodeRow>,
}
