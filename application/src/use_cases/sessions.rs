//! Session set opened at startup
//!
//! Holds every daemon session an invocation uses. Dropping the set closes
//! whatever is still open, so every exit path releases its sessions.

use crate::ports::addresses::AddressDirectory;
use crate::ports::config_store::ConfigStore;
use crate::ports::connector::ServiceConnector;
use crate::ports::error::{ServiceError, ServiceKind};
use crate::ports::membership::MembershipChannel;
use crate::ports::votes::VoteChannel;
use crate::use_cases::provider_discovery::ProviderDiscovery;
use quorumtool_domain::ViewMailbox;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A mandatory session could not be opened
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot initialize {service} service")]
pub struct InitError {
    pub service: ServiceKind,
    #[source]
    pub source: ServiceError,
}

/// The sessions of one invocation plus its notification mailbox
pub struct ClusterSessions {
    pub config_store: Box<dyn ConfigStore>,
    /// Released early by show-nodes once its view is captured
    pub membership: Option<Box<dyn MembershipChannel>>,
    pub addresses: Option<Box<dyn AddressDirectory>>,
    /// Open only while the vote provider is active
    pub votes: Option<Box<dyn VoteChannel>>,
    /// Whether the configured quorum provider is the vote provider
    pub vote_provider: bool,
    pub mailbox: ViewMailbox,
}

impl ClusterSessions {
    /// Open the config store, membership and cfg sessions, plus the vote
    /// session when the vote provider is active.
    ///
    /// Sessions opened before a failure are released on return.
    pub async fn open(connector: &dyn ServiceConnector) -> Result<Self, InitError> {
        let config_store = connector
            .connect_config_store()
            .await
            .map_err(|source| init_error(ServiceKind::ConfigStore, source))?;
        let membership = connector
            .connect_membership()
            .await
            .map_err(|source| init_error(ServiceKind::Membership, source))?;
        let addresses = connector
            .connect_addresses()
            .await
            .map_err(|source| init_error(ServiceKind::Cfg, source))?;

        let mut sessions = Self {
            config_store,
            membership: Some(membership),
            addresses: Some(addresses),
            votes: None,
            vote_provider: false,
            mailbox: ViewMailbox::new(),
        };

        let vote_provider = ProviderDiscovery::new(sessions.config_store.as_mut())
            .using_vote_provider()
            .await
            .unwrap_or(false);
        sessions.vote_provider = vote_provider;
        if vote_provider {
            // A refusal leaves the session closed; vote commands retry it
            // and report the refusal themselves
            match connector.connect_votes().await {
                Ok(votes) => sessions.votes = Some(votes),
                Err(ServiceError::NotVoteProvider { code }) => {
                    warn!("Vote service refused the session ({}); continuing without votes", code);
                }
                Err(source) => return Err(init_error(ServiceKind::Votes, source)),
            }
        } else {
            debug!("Vote provider inactive, vote session not opened");
        }

        info!(
            "Daemon sessions open (votes: {})",
            if sessions.has_votes() { "yes" } else { "no" }
        );
        Ok(sessions)
    }

    pub fn has_votes(&self) -> bool {
        self.votes.is_some()
    }

    /// Close every session still open. Safe to call more than once.
    pub fn close_all(&mut self) {
        self.config_store.close();
        if let Some(mut membership) = self.membership.take() {
            membership.close();
        }
        if let Some(mut addresses) = self.addresses.take() {
            addresses.close();
        }
        if let Some(mut votes) = self.votes.take() {
            votes.close();
        }
    }
}

impl Drop for ClusterSessions {
    fn drop(&mut self) {
        self.close_all();
    }
}

fn init_error(service: ServiceKind, source: ServiceError) -> InitError {
    tracing::error!("Cannot initialize {} service: {}", service, source);
    InitError { service, source }
}
