//! Use cases
//!
//! Application-level operations that orchestrate the daemon sessions.

pub mod change_votes;
pub mod dispatch;
pub mod provider_discovery;
pub mod resolve_node;
pub mod sessions;
pub(crate) mod shared;
pub mod show_nodes;
pub mod show_status;
pub mod wait_event;

#[cfg(test)]
pub(crate) mod test_support;
