//! Scripted daemon on Unix sockets for adapter tests.

use crate::ipc::framing::{read_frame, write_frame};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::io::BufReader;
use tokio::net::UnixListener;

/// What the daemon does with one request
pub(crate) enum Reply {
    Ok(Value),
    Err(i64),
    /// Push these notifications, then answer
    NotifyThenOk(Vec<Value>, Value),
    /// Answer, then push these notifications
    OkThenNotify(Value, Vec<Value>),
    /// Never answer
    Silent,
}

type Handler = dyn Fn(&str, &Value) -> Reply + Send + Sync;

pub(crate) struct ScriptedDaemon {
    dir: TempDir,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

/// A `quorum.notify` message
pub(crate) fn notify_view(quorate: bool, ring_id: u64, members: &[u32]) -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": "quorum.notify",
        "params": {"quorate": quorate, "ringId": ring_id, "members": members},
    })
}

impl ScriptedDaemon {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn socket(&self, service: &str) -> PathBuf {
        self.dir.path().join(format!("{}.sock", service))
    }

    /// Every request received so far, across services, as (method, params)
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|(m, _)| m).collect()
    }

    /// Listen on `<dir>/<service>.sock`, answering every request with `handler`.
    pub fn serve<F>(&self, service: &str, handler: F)
    where
        F: Fn(&str, &Value) -> Reply + Send + Sync + 'static,
    {
        let listener = UnixListener::bind(self.socket(service)).unwrap();
        let handler: Arc<Handler> = Arc::new(handler);
        let calls = Arc::clone(&self.calls);

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let handler = Arc::clone(&handler);
                let calls = Arc::clone(&calls);
                tokio::spawn(async move {
                    let (read_half, mut writer) = stream.into_split();
                    let mut reader = BufReader::new(read_half);
                    while let Ok(body) = read_frame(&mut reader).await {
                        let request: Value = serde_json::from_slice(&body).unwrap();
                        let method = request["method"].as_str().unwrap_or_default().to_string();
                        let params = request.get("params").cloned().unwrap_or(Value::Null);
                        calls.lock().unwrap().push((method.clone(), params.clone()));

                        let id = request["id"].clone();
                        let (before, response, after) = match handler(&method, &params) {
                            Reply::Ok(result) => (vec![], Some(ok(&id, result)), vec![]),
                            Reply::Err(code) => (vec![], Some(err(&id, code)), vec![]),
                            Reply::NotifyThenOk(notes, result) => {
                                (notes, Some(ok(&id, result)), vec![])
                            }
                            Reply::OkThenNotify(result, notes) => {
                                (vec![], Some(ok(&id, result)), notes)
                            }
                            Reply::Silent => (vec![], None, vec![]),
                        };
                        let frames = before.into_iter().chain(response).chain(after);
                        for frame in frames {
                            let bytes = serde_json::to_vec(&frame).unwrap();
                            if write_frame(&mut writer, &bytes).await.is_err() {
                                return;
                            }
                        }
                    }
                });
            }
        });
    }
}

fn ok(id: &Value, result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "result": result})
}

fn err(id: &Value, code: i64) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "error": {"code": code, "message": "scripted failure"}})
}
