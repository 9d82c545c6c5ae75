//! Show status use case
//!
//! Builds one status report out of two independent snapshots: the
//! membership service (quorate flag plus one tracked view) and the vote
//! service (local vote info). The two are taken close together but are
//! not mutually consistent; a membership change in between is accepted.

use crate::config::WaitOptions;
use crate::ports::error::ServiceError;
use crate::ports::membership::TrackMode;
use crate::use_cases::provider_discovery::ProviderDiscovery;
use crate::use_cases::sessions::ClusterSessions;
use crate::use_cases::shared::log_failure;
use crate::use_cases::wait_event::{end_tracking, wait_for_one_event};
use quorumtool_domain::{NodeId, QuorumType, StatusReport, VoteSummary};
use tracing::info;

/// Use case for the status report
pub struct ShowStatusUseCase<'a> {
    sessions: &'a mut ClusterSessions,
    wait: &'a WaitOptions,
}

impl<'a> ShowStatusUseCase<'a> {
    pub fn new(sessions: &'a mut ClusterSessions, wait: &'a WaitOptions) -> Self {
        Self { sessions, wait }
    }

    /// Execute the use case.
    ///
    /// Fails only when the membership service fails. A missing provider
    /// becomes "Not configured" and a failed vote query is recorded in
    /// the report so the rest can still be shown.
    pub async fn execute(&mut self) -> Result<StatusReport, ServiceError> {
        let membership = self
            .sessions
            .membership
            .as_deref_mut()
            .ok_or(ServiceError::Channel {
                op: "quorum_getquorate",
                message: "membership session is closed".into(),
            })?;

        // The reported flag comes from this query, not from the view
        let quorate = membership
            .get_quorate()
            .await
            .inspect_err(|e| log_failure("quorum_getquorate", e))?;

        self.sessions.mailbox.clear();
        membership
            .start_tracking(TrackMode::Current)
            .await
            .inspect_err(|e| log_failure("quorum_trackstart", e))?;

        let waited = wait_for_one_event(membership, &mut self.sessions.mailbox, self.wait).await;

        end_tracking(membership, &waited).await;
        let view = waited.inspect_err(|e| log_failure("quorum_dispatch", e))?;

        if view.quorate != quorate {
            info!(
                "Quorate flag query ({}) differs from view ({}); reporting the query",
                quorate, view.quorate
            );
        }

        let quorum_type = match ProviderDiscovery::new(self.sessions.config_store.as_mut())
            .quorum_provider_name()
            .await
        {
            Ok(provider) => QuorumType::Provider(provider),
            Err(_) => QuorumType::NotConfigured,
        };

        let votes = match self.sessions.votes.as_deref_mut() {
            None => VoteSummary::Inactive,
            Some(channel) => match channel.get_node_vote_info(NodeId::LOCAL).await {
                Ok(info) => VoteSummary::Available(info),
                Err(e) => {
                    log_failure("votequorum_getinfo", &e);
                    VoteSummary::Failed {
                        code: e.status_code(),
                    }
                }
            },
        };

        Ok(StatusReport {
            quorate,
            ring_id: view.ring_id,
            node_count: view.node_count(),
            quorum_type,
            votes,
        })
    }
}
