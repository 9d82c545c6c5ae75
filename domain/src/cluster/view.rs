//! Membership snapshot delivered by a tracking notification

use super::node::{NodeId, RingId};
use serde::{Deserialize, Serialize};

/// One membership view as pushed by the membership service.
///
/// Members keep the order in which the daemon delivered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterView {
    /// Quorate bit carried by the notification itself
    pub quorate: bool,
    pub ring_id: RingId,
    pub members: Vec<NodeId>,
}

impl ClusterView {
    pub fn new(quorate: bool, ring_id: RingId, members: Vec<NodeId>) -> Self {
        Self {
            quorate,
            ring_id,
            members,
        }
    }

    pub fn node_count(&self) -> usize {
        self.members.len()
    }
}
