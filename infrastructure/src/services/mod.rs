//! Adapters for the four daemon services
//!
//! Each adapter owns one [`IpcClient`] session and maps [`IpcError`]s
//! onto the application's [`ServiceError`] taxonomy.

pub mod cfg;
pub mod confdb;
pub mod connector;
pub mod quorum;
pub mod votequorum;

pub use cfg::IpcAddressDirectory;
pub use confdb::IpcConfigStore;
pub use connector::IpcServiceConnector;
pub use quorum::IpcMembership;
pub use votequorum::IpcVoteChannel;

use crate::ipc::{IpcClient, IpcError};
use quorumtool_application::{ServiceError, ServiceKind};
use serde::de::IgnoredAny;
use std::path::Path;
use std::time::Duration;

/// Socket path of `service` under `socket_dir`
pub fn socket_path(socket_dir: &Path, service: ServiceKind) -> std::path::PathBuf {
    socket_dir.join(format!("{}.sock", service.wire_name()))
}

/// Connect to a service socket and run its `initialize` handshake
async fn open_session(
    socket_dir: &Path,
    service: ServiceKind,
    request_timeout: Duration,
) -> Result<IpcClient, IpcError> {
    let mut client = IpcClient::connect(socket_path(socket_dir, service), request_timeout).await?;
    let _: IgnoredAny = client
        .request(&format!("{}.initialize", service.wire_name()), ())
        .await?;
    Ok(client)
}

fn connect_error(service: ServiceKind, err: IpcError) -> ServiceError {
    ServiceError::Connect {
        service,
        code: err.status_code(),
        message: err.to_string(),
    }
}

fn query_error(op: &'static str, err: IpcError) -> ServiceError {
    match err {
        IpcError::Rpc { code, .. } => ServiceError::Query { op, code },
        IpcError::Timeout => ServiceError::Timeout { op },
        other => ServiceError::Channel {
            op,
            message: other.to_string(),
        },
    }
}

fn command_error(op: &'static str, err: IpcError) -> ServiceError {
    match err {
        IpcError::Rpc { code, .. } => ServiceError::Command { op, code },
        IpcError::Timeout => ServiceError::Timeout { op },
        other => ServiceError::Channel {
            op,
            message: other.to_string(),
        },
    }
}
