//! Membership notification port
//!
//! The membership service answers plain requests and also pushes a
//! [`ClusterView`](quorumtool_domain::ClusterView) whenever tracking is on.
//! Pushed views are handed to the caller's mailbox one protocol message at
//! a time through [`MembershipChannel::dispatch_one`].
//!
//! ```text
//! Disconnected ─connect─▶ Connected ─start_tracking─▶ Tracking
//!       ▲                     │  ▲                        │
//!       └──────close──────────┘  └─────stop_tracking──────┘
//! ```

use super::error::ServiceError;
use async_trait::async_trait;
use quorumtool_domain::ViewMailbox;

/// Which notifications tracking should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    /// One snapshot of the current view
    Current,
    /// The current view, then every change
    Changes,
    /// Only future changes
    ChangesOnly,
}

impl TrackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackMode::Current => "current",
            TrackMode::Changes => "changes",
            TrackMode::ChangesOnly => "changes_only",
        }
    }
}

/// A session with the membership service
#[async_trait]
pub trait MembershipChannel: Send {
    /// Point-in-time quorate query, unrelated to tracking
    async fn get_quorate(&mut self) -> Result<bool, ServiceError>;

    async fn start_tracking(&mut self, mode: TrackMode) -> Result<(), ServiceError>;

    /// Process exactly one pending protocol message.
    ///
    /// A membership notification is recorded into `sink`; any other message
    /// is consumed without touching it. Returning without a delivery is
    /// normal and the caller is expected to pump again.
    async fn dispatch_one(&mut self, sink: &mut ViewMailbox) -> Result<(), ServiceError>;

    async fn stop_tracking(&mut self) -> Result<(), ServiceError>;

    /// Release the session. Calling it twice is a no-op.
    fn close(&mut self);
}
