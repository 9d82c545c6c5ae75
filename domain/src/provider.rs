//! Quorum provider identity
//!
//! The configuration store names the quorum provider the daemon runs.
//! Vote operations are only meaningful when that provider is the vote
//! provider.

use crate::core::string::bounded_copy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identifier of the vote-based quorum provider
pub const VOTE_PROVIDER: &str = "corosync_votequorum";

/// Size of the buffer the provider name is copied into, terminator included
pub const PROVIDER_NAME_MAX: usize = 256;

/// Name of the active quorum provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderIdentity(String);

impl ProviderIdentity {
    /// Build from a raw store value, truncating anything that would not
    /// fit in [`PROVIDER_NAME_MAX`].
    pub fn from_raw(raw: &str) -> Self {
        Self(bounded_copy(raw, PROVIDER_NAME_MAX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact match against [`VOTE_PROVIDER`]
    pub fn is_vote_provider(&self) -> bool {
        self.0 == VOTE_PROVIDER
    }
}

impl fmt::Display for ProviderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quorum type label shown in status reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuorumType {
    Provider(ProviderIdentity),
    NotConfigured,
}

impl QuorumType {
    pub fn label(&self) -> &str {
        match self {
            QuorumType::Provider(p) => p.as_str(),
            QuorumType::NotConfigured => "Not configured",
        }
    }
}

impl fmt::Display for QuorumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
