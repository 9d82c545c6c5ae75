//! Command dispatcher
//!
//! Opens the sessions, turns the parsed flags into exactly one
//! [`Command`], runs it, and releases every session before returning.

use crate::config::WaitOptions;
use crate::ports::addresses::NameResolver;
use crate::ports::connector::ServiceConnector;
use crate::ports::error::{ServiceError, ServiceKind};
use crate::use_cases::change_votes::ChangeVotesUseCase;
use crate::use_cases::sessions::{ClusterSessions, InitError};
use crate::use_cases::show_nodes::ShowNodesUseCase;
use crate::use_cases::show_status::ShowStatusUseCase;
use quorumtool_domain::{
    Command, DomainError, NameFormat, NodeId, NodeIdFormat, NodeListing, StatusReport,
    parse_expected_votes, parse_node_id, parse_votes,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Exit status used for usage errors and codeless failures
pub const FAILURE_STATUS: i32 = -1;

/// Raw command selection as parsed from the command line
#[derive(Debug, Clone, Default)]
pub struct CommandRequest {
    pub show_status: bool,
    pub show_nodes: bool,
    /// `-v` value, unparsed
    pub votes: Option<String>,
    /// `-e` value, unparsed
    pub expected: Option<String>,
    /// `-n` value, unparsed; only meaningful with `-v`
    pub node_id: Option<String>,
    pub node_id_format: NodeIdFormat,
    pub name_format: NameFormat,
}

impl CommandRequest {
    fn selections(&self) -> usize {
        [
            self.show_status,
            self.show_nodes,
            self.votes.is_some(),
            self.expected.is_some(),
        ]
        .into_iter()
        .filter(|selected| *selected)
        .count()
    }
}

/// What a successful invocation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// No command selected; usage goes to the operator
    Usage,
    Status(StatusReport),
    Nodes(NodeListing),
    VotesChanged { node_id: NodeId, votes: u32 },
    ExpectedChanged { expected: u32 },
}

impl CommandOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandOutcome::Usage => FAILURE_STATUS,
            CommandOutcome::Status(report) => match report.vote_failure() {
                Some(code) => status_or_failure(code),
                None => i32::from(report.quorate),
            },
            CommandOutcome::Nodes(_)
            | CommandOutcome::VotesChanged { .. }
            | CommandOutcome::ExpectedChanged { .. } => 0,
        }
    }
}

/// Errors that end an invocation
#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Init(#[from] InitError),

    #[error("You cannot change {what}, corosync is not using votequorum")]
    NoVoteProvider { what: &'static str },

    #[error(transparent)]
    InvalidArgument(#[from] DomainError),

    #[error(
        "votequorum_initialize FAILED: {}, this is probably a configuration error",
        code_text(.code)
    )]
    VoteSessionRefused { code: Option<i64> },

    #[error("{action} FAILED: {}", status_text(.source))]
    VoteChange {
        action: &'static str,
        source: ServiceError,
    },

    #[error("Cannot list nodes: {0}")]
    NodeListing(#[source] ServiceError),

    #[error(transparent)]
    Service(ServiceError),
}

impl ToolError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolError::Init(_) => 1,
            ToolError::NoVoteProvider { .. } => 2,
            ToolError::InvalidArgument(_) => FAILURE_STATUS,
            ToolError::VoteSessionRefused { code } => status_or_failure(*code),
            ToolError::VoteChange { source, .. } => status_or_failure(source.status_code()),
            ToolError::NodeListing(_) => 1,
            ToolError::Service(e) => status_or_failure(e.status_code()),
        }
    }

    /// Whether usage should follow the message
    pub fn wants_usage(&self) -> bool {
        matches!(self, ToolError::InvalidArgument(_))
    }
}

fn status_or_failure(code: Option<i64>) -> i32 {
    code.and_then(|c| i32::try_from(c).ok())
        .unwrap_or(FAILURE_STATUS)
}

fn code_text(code: &Option<i64>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

fn status_text(err: &ServiceError) -> String {
    code_text(&err.status_code())
}

/// Resolve the one command this invocation runs.
///
/// Vote commands are refused before their values are parsed, so an
/// inactive vote provider is reported ahead of a malformed number.
/// Selecting more than one command leaves the intent unknown.
pub fn select_command(
    request: &CommandRequest,
    vote_provider_active: bool,
) -> Result<Command, ToolError> {
    if request.selections() > 1 {
        return Ok(Command::Unknown);
    }

    if request.node_id.is_some() && request.votes.is_none() {
        warn!("-n is only used together with -v; ignoring it");
    }

    if request.show_status {
        return Ok(Command::ShowStatus);
    }
    if request.show_nodes {
        return Ok(Command::ShowNodes);
    }

    if let Some(raw) = &request.votes {
        if !vote_provider_active {
            return Err(ToolError::NoVoteProvider { what: "node votes" });
        }
        let votes = parse_votes(raw)?;
        let node_id = match &request.node_id {
            Some(raw_id) => parse_node_id(raw_id)?,
            None => NodeId::LOCAL,
        };
        return Ok(Command::SetVotes { node_id, votes });
    }

    if let Some(raw) = &request.expected {
        if !vote_provider_active {
            return Err(ToolError::NoVoteProvider {
                what: "expected votes",
            });
        }
        let expected = parse_expected_votes(raw)?;
        return Ok(Command::SetExpected { expected });
    }

    Ok(Command::Unknown)
}

/// Entry point for one invocation
pub struct QuorumTool {
    connector: Arc<dyn ServiceConnector>,
    resolver: Arc<dyn NameResolver>,
    wait: WaitOptions,
}

impl QuorumTool {
    pub fn new(
        connector: Arc<dyn ServiceConnector>,
        resolver: Arc<dyn NameResolver>,
        wait: WaitOptions,
    ) -> Self {
        Self {
            connector,
            resolver,
            wait,
        }
    }

    /// Open the sessions, run the selected command, close everything.
    pub async fn run(&self, request: &CommandRequest) -> Result<CommandOutcome, ToolError> {
        let mut sessions = ClusterSessions::open(self.connector.as_ref()).await?;
        let outcome = self.execute(request, &mut sessions).await;
        sessions.close_all();
        outcome
    }

    async fn execute(
        &self,
        request: &CommandRequest,
        sessions: &mut ClusterSessions,
    ) -> Result<CommandOutcome, ToolError> {
        let command = select_command(request, sessions.vote_provider)?;
        debug!("Running {:?}", command);

        match command {
            Command::Unknown => Ok(CommandOutcome::Usage),
            Command::ShowStatus => ShowStatusUseCase::new(sessions, &self.wait)
                .execute()
                .await
                .map(CommandOutcome::Status)
                .map_err(ToolError::Service),
            Command::ShowNodes => ShowNodesUseCase::new(
                self.connector.as_ref(),
                sessions,
                self.resolver.as_ref(),
                &self.wait,
            )
            .execute(request.name_format)
            .await
            .map(CommandOutcome::Nodes)
            .map_err(ToolError::NodeListing),
            Command::SetVotes { node_id, votes } => {
                ChangeVotesUseCase::new(self.connector.as_ref(), sessions)
                    .set_node_votes(node_id, votes)
                    .await
                    .map_err(|e| vote_change_error("set votes", e))?;
                Ok(CommandOutcome::VotesChanged { node_id, votes })
            }
            Command::SetExpected { expected } => {
                ChangeVotesUseCase::new(self.connector.as_ref(), sessions)
                    .set_expected_votes(expected)
                    .await
                    .map_err(|e| vote_change_error("set expected votes", e))?;
                Ok(CommandOutcome::ExpectedChanged { expected })
            }
        }
    }
}

fn vote_change_error(action: &'static str, err: ServiceError) -> ToolError {
    match err {
        ServiceError::NotVoteProvider { code } => ToolError::VoteSessionRefused { code: Some(code) },
        ServiceError::Connect {
            service: ServiceKind::Votes,
            code,
            ..
        } => ToolError::VoteSessionRefused { code },
        source => ToolError::VoteChange { action, source },
    }
}
