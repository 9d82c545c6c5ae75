//! Domain layer for quorumtool
//!
//! This crate contains the value types shared by every other layer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Cluster view
//!
//! A [`ClusterView`] is one membership snapshot pushed by the membership
//! service: quorate bit, ring id and the ordered member list. Views are
//! delivered into a single-slot [`ViewMailbox`] owned by the waiting caller.
//!
//! ## Votes
//!
//! [`NodeVoteInfo`] is queried per node from the vote service and is never
//! cached. Vote operations are only valid while the active quorum provider
//! is the vote provider (see [`ProviderIdentity`]).

pub mod cluster;
pub mod command;
pub mod core;
pub mod provider;
pub mod report;
pub mod votes;

// Re-export commonly used types
pub use cluster::{
    mailbox::ViewMailbox,
    node::{NameFormat, NodeId, NodeIdFormat, RingId},
    view::ClusterView,
};
pub use command::Command;
pub use core::{
    error::DomainError,
    numeric::{parse_expected_votes, parse_node_id, parse_votes},
};
pub use provider::{PROVIDER_NAME_MAX, ProviderIdentity, QuorumType, VOTE_PROVIDER};
pub use report::{NodeListing, NodeRow, StatusReport, UNKNOWN_VOTES, VoteSummary};
pub use votes::{NodeVoteInfo, VoteFlag, VoteFlags};
