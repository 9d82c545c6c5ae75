//! In-memory fakes of the daemon services for use case tests.

use crate::ports::addresses::{AddressDirectory, NameResolver};
use crate::ports::config_store::ConfigStore;
use crate::ports::connector::ServiceConnector;
use crate::ports::error::{ServiceError, ServiceKind};
use crate::ports::membership::{MembershipChannel, TrackMode};
use crate::ports::votes::VoteChannel;
use async_trait::async_trait;
use quorumtool_domain::{
    ClusterView, NameFormat, NodeId, NodeVoteInfo, RingId, ViewMailbox, VoteFlag, VoteFlags,
};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    pub provider: Option<String>,
    pub store_fails: bool,
    pub quorate: bool,
    pub quorate_fails: bool,
    pub view: Option<ClusterView>,
    /// Deliver the view on this pump after tracking starts; 0 never delivers
    pub deliver_after: usize,
    pub dispatch_fails: bool,
    pub tracking: bool,
    pub delivered: bool,
    pub pumps: usize,
    pub track_modes: Vec<TrackMode>,
    pub stop_calls: usize,
    pub vote_info: HashMap<NodeId, NodeVoteInfo>,
    pub addresses: HashMap<NodeId, Vec<IpAddr>>,
    pub refuse: HashSet<ServiceKind>,
    pub votes_refused_code: Option<i64>,
    pub command_fails_code: Option<i64>,
    pub connects: Vec<ServiceKind>,
    pub closes: Vec<ServiceKind>,
    pub vote_queries: Vec<NodeId>,
    pub set_votes_calls: Vec<(NodeId, u32)>,
    pub set_expected_calls: Vec<u32>,
}

/// Shared fake daemon; every session handed out talks to the same state.
#[derive(Clone, Default)]
pub(crate) struct FakeDaemon {
    state: Arc<Mutex<FakeState>>,
}

pub(crate) fn vote_info(votes: u32, flags: &[VoteFlag]) -> NodeVoteInfo {
    NodeVoteInfo {
        node_votes: votes,
        node_expected_votes: 3,
        highest_expected: 3,
        total_votes: 3,
        quorum_threshold: 2,
        flags: flags.iter().copied().collect::<VoteFlags>(),
    }
}

impl FakeDaemon {
    pub fn new() -> Self {
        let daemon = Self::default();
        daemon.state().deliver_after = 1;
        daemon
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn with_provider(self, name: &str) -> Self {
        self.state().provider = Some(name.to_string());
        self
    }

    pub fn with_failing_store(self) -> Self {
        self.state().store_fails = true;
        self
    }

    pub fn with_quorate(self, quorate: bool) -> Self {
        self.state().quorate = quorate;
        self
    }

    pub fn with_view(self, quorate: bool, ring: u64, members: &[u32]) -> Self {
        self.state().view = Some(ClusterView::new(
            quorate,
            RingId::new(ring),
            members.iter().copied().map(NodeId::new).collect(),
        ));
        self
    }

    pub fn deliver_after(self, pumps: usize) -> Self {
        self.state().deliver_after = pumps;
        self
    }

    pub fn with_vote_info(self, node: u32, info: NodeVoteInfo) -> Self {
        self.state().vote_info.insert(NodeId::new(node), info);
        self
    }

    pub fn with_addresses(self, node: u32, addrs: &[&str]) -> Self {
        self.state().addresses.insert(
            NodeId::new(node),
            addrs.iter().map(|a| a.parse().unwrap()).collect(),
        );
        self
    }

    pub fn refusing(self, service: ServiceKind) -> Self {
        self.state().refuse.insert(service);
        self
    }

    pub fn config_store(&self) -> FakeConfigStore {
        FakeConfigStore(FakeSession::new(self, ServiceKind::ConfigStore))
    }

    pub fn membership(&self) -> FakeMembership {
        FakeMembership(FakeSession::new(self, ServiceKind::Membership))
    }

    pub fn addresses(&self) -> FakeAddresses {
        FakeAddresses(FakeSession::new(self, ServiceKind::Cfg))
    }

    pub fn votes(&self) -> FakeVotes {
        FakeVotes(FakeSession::new(self, ServiceKind::Votes))
    }

    pub fn connector(&self) -> FakeConnector {
        FakeConnector(self.clone())
    }
}

/// Common session bookkeeping: close is idempotent and runs on drop.
pub(crate) struct FakeSession {
    daemon: FakeDaemon,
    kind: ServiceKind,
    closed: bool,
}

impl FakeSession {
    fn new(daemon: &FakeDaemon, kind: ServiceKind) -> Self {
        Self {
            daemon: daemon.clone(),
            kind,
            closed: false,
        }
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.daemon.state()
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.daemon.state().closes.push(self.kind);
        }
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.close();
    }
}

pub(crate) struct FakeConfigStore(FakeSession);

#[async_trait]
impl ConfigStore for FakeConfigStore {
    async fn key_get(
        &mut self,
        object_path: &str,
        key: &str,
    ) -> Result<Option<String>, ServiceError> {
        let state = self.0.state();
        if state.store_fails {
            return Err(ServiceError::Query {
                op: "confdb_key_get",
                code: 2,
            });
        }
        if object_path == "quorum" && key == "provider" {
            Ok(state.provider.clone())
        } else {
            Ok(None)
        }
    }

    fn close(&mut self) {
        self.0.close();
    }
}

pub(crate) struct FakeMembership(FakeSession);

#[async_trait]
impl MembershipChannel for FakeMembership {
    async fn get_quorate(&mut self) -> Result<bool, ServiceError> {
        let state = self.0.state();
        if state.quorate_fails {
            return Err(ServiceError::Query {
                op: "quorum_getquorate",
                code: 2,
            });
        }
        Ok(state.quorate)
    }

    async fn start_tracking(&mut self, mode: TrackMode) -> Result<(), ServiceError> {
        let mut state = self.0.state();
        state.track_modes.push(mode);
        state.tracking = true;
        state.delivered = false;
        state.pumps = 0;
        Ok(())
    }

    async fn dispatch_one(&mut self, sink: &mut ViewMailbox) -> Result<(), ServiceError> {
        let mut state = self.0.state();
        state.pumps += 1;
        if state.dispatch_fails {
            return Err(ServiceError::Channel {
                op: "quorum_dispatch",
                message: "connection reset".into(),
            });
        }
        if state.tracking
            && !state.delivered
            && state.deliver_after != 0
            && state.pumps >= state.deliver_after
            && let Some(view) = state.view.clone()
        {
            state.delivered = true;
            sink.deliver(view);
        }
        Ok(())
    }

    async fn stop_tracking(&mut self) -> Result<(), ServiceError> {
        let mut state = self.0.state();
        state.tracking = false;
        state.stop_calls += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.0.close();
    }
}

pub(crate) struct FakeAddresses(FakeSession);

#[async_trait]
impl AddressDirectory for FakeAddresses {
    async fn node_addresses(
        &mut self,
        node_id: NodeId,
        max: usize,
    ) -> Result<Vec<IpAddr>, ServiceError> {
        let state = self.0.state();
        match state.addresses.get(&node_id) {
            Some(addrs) => Ok(addrs.iter().take(max).copied().collect()),
            None => Err(ServiceError::Query {
                op: "corosync_cfg_get_node_addrs",
                code: 12,
            }),
        }
    }

    fn close(&mut self) {
        self.0.close();
    }
}

pub(crate) struct FakeVotes(FakeSession);

#[async_trait]
impl VoteChannel for FakeVotes {
    async fn get_node_vote_info(&mut self, node_id: NodeId) -> Result<NodeVoteInfo, ServiceError> {
        let mut state = self.0.state();
        state.vote_queries.push(node_id);
        state
            .vote_info
            .get(&node_id)
            .cloned()
            .ok_or(ServiceError::Query {
                op: "votequorum_getinfo",
                code: 12,
            })
    }

    async fn set_node_votes(&mut self, node_id: NodeId, votes: u32) -> Result<(), ServiceError> {
        let mut state = self.0.state();
        state.set_votes_calls.push((node_id, votes));
        match state.command_fails_code {
            Some(code) => Err(ServiceError::Command {
                op: "votequorum_setvotes",
                code,
            }),
            None => Ok(()),
        }
    }

    async fn set_expected_votes(&mut self, expected: u32) -> Result<(), ServiceError> {
        let mut state = self.0.state();
        state.set_expected_calls.push(expected);
        match state.command_fails_code {
            Some(code) => Err(ServiceError::Command {
                op: "votequorum_setexpected",
                code,
            }),
            None => Ok(()),
        }
    }

    fn close(&mut self) {
        self.0.close();
    }
}

pub(crate) struct FakeConnector(FakeDaemon);

impl FakeConnector {
    fn check(&self, service: ServiceKind) -> Result<(), ServiceError> {
        let mut state = self.0.state();
        if state.refuse.contains(&service) {
            return Err(ServiceError::Connect {
                service,
                code: Some(2),
                message: "refused".into(),
            });
        }
        state.connects.push(service);
        Ok(())
    }
}

#[async_trait]
impl ServiceConnector for FakeConnector {
    async fn connect_config_store(&self) -> Result<Box<dyn ConfigStore>, ServiceError> {
        self.check(ServiceKind::ConfigStore)?;
        Ok(Box::new(self.0.config_store()))
    }

    async fn connect_membership(&self) -> Result<Box<dyn MembershipChannel>, ServiceError> {
        self.check(ServiceKind::Membership)?;
        Ok(Box::new(self.0.membership()))
    }

    async fn connect_addresses(&self) -> Result<Box<dyn AddressDirectory>, ServiceError> {
        self.check(ServiceKind::Cfg)?;
        Ok(Box::new(self.0.addresses()))
    }

    async fn connect_votes(&self) -> Result<Box<dyn VoteChannel>, ServiceError> {
        if let Some(code) = self.0.state().votes_refused_code {
            return Err(ServiceError::NotVoteProvider { code });
        }
        self.check(ServiceKind::Votes)?;
        Ok(Box::new(self.0.votes()))
    }
}

/// Resolver backed by a fixed table; numeric requests never consult it.
#[derive(Default)]
pub(crate) struct FakeResolver {
    names: HashMap<IpAddr, String>,
}

impl FakeResolver {
    pub fn with_name(mut self, addr: &str, name: &str) -> Self {
        self.names.insert(addr.parse().unwrap(), name.to_string());
        self
    }
}

impl NameResolver for FakeResolver {
    fn resolve(&self, addr: IpAddr, format: NameFormat) -> Result<String, String> {
        match format {
            NameFormat::NumericAddress => Ok(addr.to_string()),
            NameFormat::DisplayName => self
                .names
                .get(&addr)
                .cloned()
                .ok_or_else(|| format!("no name for {}", addr)),
        }
    }
}
