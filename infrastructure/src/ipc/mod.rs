//! Client side of the daemon's IPC protocol
//!
//! Every service listens on its own Unix socket and speaks JSON-RPC 2.0
//! in `Content-Length` framed messages. One [`IpcClient`] is one session.

pub mod client;
pub mod error;
pub mod framing;
pub mod protocol;

pub use client::IpcClient;
pub use error::{IpcError, Result};
