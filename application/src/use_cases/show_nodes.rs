//! Show nodes use case
//!
//! Captures one membership view, releases the membership session, then
//! walks the members in delivered order through a fresh cfg session.

use crate::config::WaitOptions;
use crate::ports::addresses::NameResolver;
use crate::ports::connector::ServiceConnector;
use crate::ports::error::ServiceError;
use crate::ports::membership::TrackMode;
use crate::use_cases::resolve_node::resolve_node;
use crate::use_cases::sessions::ClusterSessions;
use crate::use_cases::shared::log_failure;
use crate::use_cases::wait_event::{end_tracking, wait_for_one_event};
use quorumtool_domain::{ClusterView, NameFormat, NodeListing, NodeRow, UNKNOWN_VOTES};
use tracing::{debug, warn};

/// Use case for the node listing
pub struct ShowNodesUseCase<'a> {
    connector: &'a dyn ServiceConnector,
    sessions: &'a mut ClusterSessions,
    resolver: &'a dyn NameResolver,
    wait: &'a WaitOptions,
}

impl<'a> ShowNodesUseCase<'a> {
    pub fn new(
        connector: &'a dyn ServiceConnector,
        sessions: &'a mut ClusterSessions,
        resolver: &'a dyn NameResolver,
        wait: &'a WaitOptions,
    ) -> Self {
        Self {
            connector,
            sessions,
            resolver,
            wait,
        }
    }

    /// Execute the use case.
    ///
    /// Only tracking and opening the fresh cfg session can fail. Once the
    /// rows are being built nothing aborts the listing: an unresolvable
    /// node gets an empty name and a failed vote query gets
    /// [`UNKNOWN_VOTES`].
    pub async fn execute(&mut self, name_format: NameFormat) -> Result<NodeListing, ServiceError> {
        let view = self.capture_view().await?;

        // The startup cfg session is replaced, never held next to membership
        if let Some(mut startup) = self.sessions.addresses.take() {
            startup.close();
        }
        let directory = self
            .connector
            .connect_addresses()
            .await
            .inspect_err(|e| log_failure("corosync_cfg_initialize", e))?;
        let with_votes = self.sessions.has_votes();
        let directory = self.sessions.addresses.insert(directory);

        let mut rows = Vec::with_capacity(view.members.len());
        for &node_id in &view.members {
            let votes = match self.sessions.votes.as_deref_mut() {
                None => None,
                Some(channel) => match channel.get_node_vote_info(node_id).await {
                    Ok(info) => Some(i32::try_from(info.node_votes).unwrap_or(i32::MAX)),
                    Err(e) => {
                        warn!("Vote query for node {} failed: {}", node_id, e);
                        Some(UNKNOWN_VOTES)
                    }
                },
            };
            let name =
                resolve_node(directory.as_mut(), self.resolver, node_id, name_format).await;
            rows.push(NodeRow {
                node_id,
                votes,
                name,
            });
        }

        debug!("Listed {} nodes", rows.len());
        Ok(NodeListing { with_votes, rows })
    }

    /// Track, wait for one view, stop, and release the membership session
    async fn capture_view(&mut self) -> Result<ClusterView, ServiceError> {
        let mut membership = self.sessions.membership.take().ok_or(ServiceError::Channel {
            op: "quorum_trackstart",
            message: "membership session is closed".into(),
        })?;

        self.sessions.mailbox.clear();
        let waited = match membership.start_tracking(TrackMode::Current).await {
            Ok(()) => {
                let waited = wait_for_one_event(
                    membership.as_mut(),
                    &mut self.sessions.mailbox,
                    self.wait,
                )
                .await;
                end_tracking(membership.as_mut(), &waited).await;
                waited.inspect_err(|e| log_failure("quorum_dispatch", e))
            }
            Err(e) => {
                log_failure("quorum_trackstart", &e);
                Err(e)
            }
        };

        membership.close();
        waited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::error::ServiceKind;
    use crate::use_cases::test_support::{FakeDaemon, FakeResolver, vote_info};
    use quorumtool_domain::NodeId;

    async fn listing_for(
        daemon: &FakeDaemon,
        resolver: &FakeResolver,
        format: NameFormat,
    ) -> Result<NodeListing, ServiceError> {
        let connector = daemon.connector();
        let mut sessions = ClusterSessions::open(&connector).await.unwrap();
        let wait = WaitOptions::new();
        ShowNodesUseCase::new(&connector, &mut sessions, resolver, &wait)
            .execute(format)
            .await
    }

    fn ids(listing: &NodeListing) -> Vec<u32> {
        listing.rows.iter().map(|r| r.node_id.get()).collect()
    }

    #[tokio::test]
    async fn test_rows_follow_delivered_order() {
        let daemon = FakeDaemon::new()
            .with_view(true, 12, &[3, 1, 2])
            .with_addresses(1, &["10.0.0.1"])
            .with_addresses(2, &["10.0.0.2"])
            .with_addresses(3, &["10.0.0.3"]);
        let resolver = FakeResolver::default()
            .with_name("10.0.0.1", "alpha")
            .with_name("10.0.0.2", "beta")
            .with_name("10.0.0.3", "gamma");

        let listing = listing_for(&daemon, &resolver, NameFormat::DisplayName)
            .await
            .unwrap();

        assert!(!listing.with_votes);
        assert_eq!(ids(&listing), vec![3, 1, 2]);
        let names: Vec<_> = listing.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["gamma", "alpha", "beta"]);
        assert!(listing.rows.iter().all(|r| r.votes.is_none()));
    }

    #[tokio::test]
    async fn test_resolution_failure_leaves_name_empty() {
        let daemon = FakeDaemon::new()
            .with_view(true, 12, &[1, 2, 3])
            .with_addresses(1, &["10.0.0.1"])
            .with_addresses(3, &["10.0.0.3"]);
        let resolver = FakeResolver::default().with_name("10.0.0.1", "alpha");

        let listing = listing_for(&daemon, &resolver, NameFormat::DisplayName)
            .await
            .unwrap();

        assert_eq!(listing.rows.len(), 3);
        let names: Vec<_> = listing.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "", ""]);
    }

    #[tokio::test]
    async fn test_numeric_addresses() {
        let daemon = FakeDaemon::new()
            .with_view(true, 12, &[1])
            .with_addresses(1, &["192.168.1.10", "10.0.0.1"]);
        let listing = listing_for(&daemon, &FakeResolver::default(), NameFormat::NumericAddress)
            .await
            .unwrap();
        assert_eq!(listing.rows[0].name, "192.168.1.10");
    }

    #[tokio::test]
    async fn test_votes_queried_per_node_with_sentinel() {
        let daemon = FakeDaemon::new()
            .with_provider("corosync_votequorum")
            .with_view(true, 12, &[1, 2])
            .with_vote_info(1, vote_info(3, &[]));
        let listing = listing_for(&daemon, &FakeResolver::default(), NameFormat::DisplayName)
            .await
            .unwrap();

        assert!(listing.with_votes);
        let votes: Vec<_> = listing.rows.iter().map(|r| r.votes).collect();
        assert_eq!(votes, vec![Some(3), Some(UNKNOWN_VOTES)]);
        assert_eq!(
            daemon.state().vote_queries,
            vec![NodeId::new(1), NodeId::new(2)]
        );
    }

    #[tokio::test]
    async fn test_membership_released_and_cfg_reopened() {
        let daemon = FakeDaemon::new().with_view(true, 12, &[1]);
        let _ = listing_for(&daemon, &FakeResolver::default(), NameFormat::DisplayName)
            .await
            .unwrap();

        let state = daemon.state();
        assert_eq!(state.stop_calls, 1);
        let cfg_connects = state
            .connects
            .iter()
            .filter(|k| **k == ServiceKind::Cfg)
            .count();
        assert_eq!(cfg_connects, 2);
        let membership_pos = state
            .closes
            .iter()
            .position(|k| *k == ServiceKind::Membership)
            .unwrap();
        let first_cfg_close = state
            .closes
            .iter()
            .position(|k| *k == ServiceKind::Cfg)
            .unwrap();
        assert!(membership_pos < first_cfg_close);
    }

    #[tokio::test]
    async fn test_fresh_cfg_refusal_fails_listing() {
        let daemon = FakeDaemon::new().with_view(true, 12, &[1]);
        let connector = daemon.connector();
        let mut sessions = ClusterSessions::open(&connector).await.unwrap();
        daemon.state().refuse.insert(ServiceKind::Cfg);

        let wait = WaitOptions::new();
        let resolver = FakeResolver::default();
        let result = ShowNodesUseCase::new(&connector, &mut sessions, &resolver, &wait)
            .execute(NameFormat::DisplayName)
            .await;
        assert!(matches!(result, Err(ServiceError::Connect { .. })));
    }

    #[tokio::test]
    async fn test_dispatch_failure_releases_membership() {
        let daemon = FakeDaemon::new().with_view(true, 12, &[1]);
        daemon.state().dispatch_fails = true;
        let connector = daemon.connector();
        let mut sessions = ClusterSessions::open(&connector).await.unwrap();

        let wait = WaitOptions::new();
        let resolver = FakeResolver::default();
        let result = ShowNodesUseCase::new(&connector, &mut sessions, &resolver, &wait)
            .execute(NameFormat::DisplayName)
            .await;

        assert!(result.is_err());
        assert!(sessions.membership.is_none());
        assert!(daemon.state().closes.contains(&ServiceKind::Membership));
    }

    #[tokio::test]
    async fn test_timed_out_wait_skips_trackstop() {
        let daemon = FakeDaemon::new().with_view(true, 5, &[1]).deliver_after(0);
        let connector = daemon.connector();
        let mut sessions = ClusterSessions::open(&connector).await.unwrap();
        let wait = WaitOptions::new().with_timeout(std::time::Duration::from_millis(20));

        let resolver = FakeResolver::default();

        let result = ShowNodesUseCase::new(&connector, &mut sessions, &resolver, &wait)
            .execute(NameFormat::DisplayName)
            .await;

        assert!(matches!(result, Err(ServiceError::Timeout { .. })));
        let state = daemon.state();
        assert_eq!(state.stop_calls, 0);
        assert_eq!(
            state.closes.iter().filter(|k| **k == ServiceKind::Membership).count(),
            1
        );
    }
}
