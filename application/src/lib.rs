//! Application layer for quorumtool
//!
//! This crate contains use cases and port definitions. Ports describe the
//! four daemon services as independent sessions; adapters live in the
//! infrastructure layer. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::WaitOptions;
pub use ports::{
    addresses::{AddressDirectory, INTERFACE_MAX, NameResolver},
    config_store::ConfigStore,
    connector::ServiceConnector,
    error::{ServiceError, ServiceKind},
    membership::{MembershipChannel, TrackMode},
    votes::VoteChannel,
};
pub use use_cases::change_votes::ChangeVotesUseCase;
pub use use_cases::dispatch::{
    CommandOutcome, CommandRequest, FAILURE_STATUS, QuorumTool, ToolError, select_command,
};
pub use use_cases::provider_discovery::ProviderDiscovery;
pub use use_cases::resolve_node::resolve_node;
pub use use_cases::sessions::{ClusterSessions, InitError};
pub use use_cases::show_nodes::ShowNodesUseCase;
pub use use_cases::show_status::ShowStatusUseCase;
pub use use_cases::wait_event::wait_for_one_event;
