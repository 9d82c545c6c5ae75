//! Port definitions (interfaces for external adapters)
//!
//! Each daemon service is reached through its own session. Sessions are
//! released when dropped, so early returns never leak them.

pub mod addresses;
pub mod config_store;
pub mod connector;
pub mod error;
pub mod membership;
pub mod votes;
