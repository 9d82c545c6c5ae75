//! Per-node vote information
//!
//! Vote data is fetched fresh from the vote service on every query; the
//! daemon is the only source of truth.

pub mod flags;
pub mod info;

pub use flags::{VoteFlag, VoteFlags};
pub use info::NodeVoteInfo;
