//! Vote information for a single node

use super::flags::{VoteFlag, VoteFlags};
use serde::{Deserialize, Serialize};

/// Vote state of one node plus the cluster-wide totals it sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeVoteInfo {
    pub node_votes: u32,
    pub node_expected_votes: u32,
    pub highest_expected: u32,
    pub total_votes: u32,
    pub quorum_threshold: u32,
    pub flags: VoteFlags,
}

impl NodeVoteInfo {
    pub fn is_quorate(&self) -> bool {
        self.flags.contains(VoteFlag::Quorate)
    }

    /// Suffix printed after the quorum threshold
    pub fn activity_label(&self) -> &'static str {
        if self.is_quorate() {
            " "
        } else {
            "Activity blocked"
        }
    }
}
