//! Errors shared by all service ports

use std::fmt;
use thiserror::Error;

/// The daemon service a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    ConfigStore,
    Membership,
    Cfg,
    Votes,
}

impl ServiceKind {
    /// Name used in operator messages (`Cannot initialize QUORUM service`)
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::ConfigStore => "CONFDB",
            ServiceKind::Membership => "QUORUM",
            ServiceKind::Cfg => "CFG",
            ServiceKind::Votes => "VOTEQUORUM",
        }
    }

    /// Socket / method namespace on the daemon side
    pub fn wire_name(&self) -> &'static str {
        match self {
            ServiceKind::ConfigStore => "confdb",
            ServiceKind::Membership => "quorum",
            ServiceKind::Cfg => "cfg",
            ServiceKind::Votes => "votequorum",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Errors that can occur while talking to a daemon service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Daemon unreachable or the service refused the session
    #[error("Cannot connect to {service} service: {message}")]
    Connect {
        service: ServiceKind,
        code: Option<i64>,
        message: String,
    },

    /// Vote operations requested while the vote provider is inactive
    #[error("votequorum is not the active quorum provider (status {code})")]
    NotVoteProvider { code: i64 },

    /// No quorum provider is configured
    #[error("quorum provider not configured")]
    NotConfigured,

    /// A read request was rejected
    #[error("{op} FAILED: {code}")]
    Query { op: &'static str, code: i64 },

    /// A state-changing request was rejected
    #[error("{op} FAILED: {code}")]
    Command { op: &'static str, code: i64 },

    /// Transport or dispatch failure
    #[error("{op} FAILED: {message}")]
    Channel { op: &'static str, message: String },

    #[error("{op} timed out")]
    Timeout { op: &'static str },

    #[error("Operation cancelled")]
    Cancelled,
}

impl ServiceError {
    /// Numeric daemon status code, when the daemon supplied one
    pub fn status_code(&self) -> Option<i64> {
        match self {
            ServiceError::Connect { code, .. } => *code,
            ServiceError::NotVoteProvider { code } => Some(*code),
            ServiceError::Query { code, .. } | ServiceError::Command { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// A wait that was cut off by its timeout or by cancellation
    pub fn is_interrupted(&self) -> bool {
        matches!(self, ServiceError::Timeout { .. } | ServiceError::Cancelled)
    }
}
