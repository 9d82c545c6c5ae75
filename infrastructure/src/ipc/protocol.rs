//! JSON-RPC protocol types for the daemon services.
//!
//! - **Requests**: client → service (e.g. `quorum.getquorate`)
//! - **Responses**: service → client, `result` or `error {code, message}`
//! - **Notifications**: service → client, pushed while tracking (`quorum.notify`)
//!
//! Error codes are the daemon's own status codes.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Daemon status codes the client reacts to
pub mod status {
    /// Requested object or key does not exist
    pub const NOT_EXIST: i64 = 12;
    /// Service present but not the active provider
    pub const NOT_SUPPORTED: i64 = 20;
}

/// Global request ID counter for JSON-RPC requests.
static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    REQUEST_ID.fetch_add(1, Ordering::SeqCst)
}

/// JSON-RPC request
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC request with an auto-generated ID.
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: next_id(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    pub id: Option<u64>,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Notification pushed by a service
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcNotification {
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// Classification of an incoming JSON-RPC message.
#[derive(Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// A response to a request we sent (has `id`, no `method`).
    Response,
    /// A request from the service (has `id` + `method`); never expected.
    IncomingRequest { id: u64 },
    /// A notification (has `method`, no `id`).
    Notification,
}

/// Classify a JSON-RPC message by inspecting `id` and `method` fields.
pub fn classify_message(json: &serde_json::Value) -> MessageKind {
    let has_id = json.get("id").and_then(|v| v.as_u64());
    let has_method = json.get("method").and_then(|v| v.as_str());

    match (has_id, has_method) {
        (Some(id), Some(_)) => MessageKind::IncomingRequest { id },
        (Some(_), None) => MessageKind::Response,
        _ => MessageKind::Notification,
    }
}

// ---- confdb ----

#[derive(Debug, Clone, Serialize)]
pub struct KeyGetParams<'a> {
    pub object: &'a str,
    pub key: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyGetResult {
    pub value: String,
}

// ---- quorum ----

#[derive(Debug, Clone, Deserialize)]
pub struct GetQuorateResult {
    pub quorate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackStartParams {
    pub flags: &'static str,
}

/// Params of `quorum.notify`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuorumNotifyParams {
    pub quorate: bool,
    pub ring_id: u64,
    #[serde(default)]
    pub members: Vec<u32>,
}

// ---- cfg ----

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNodeAddrsParams {
    pub nodeid: u32,
    pub max_addrs: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetNodeAddrsResult {
    #[serde(default)]
    pub addrs: Vec<String>,
}

// ---- votequorum ----

#[derive(Debug, Clone, Serialize)]
pub struct GetInfoParams {
    pub nodeid: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInfoResult {
    pub node_votes: u32,
    pub node_expected_votes: u32,
    pub highest_expected: u32,
    pub total_votes: u32,
    pub quorum: u32,
    #[serde(default)]
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetVotesParams {
    pub nodeid: u32,
    pub votes: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetExpectedParams {
    pub expected_votes: u32,
}
