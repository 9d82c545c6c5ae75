//! Command intents

use crate::cluster::node::NodeId;

/// The one action an invocation performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Nothing selected: print usage and fail
    #[default]
    Unknown,
    ShowNodes,
    ShowStatus,
    SetVotes { node_id: NodeId, votes: u32 },
    SetExpected { expected: u32 },
}

impl Command {
    /// Whether this command talks to the vote service
    pub fn needs_vote_provider(&self) -> bool {
        matches!(self, Command::SetVotes { .. } | Command::SetExpected { .. })
    }
}
