//! One client session on a daemon service socket.
//!
//! The tool is single threaded, so there is no background reader: the
//! stream is read only while a request waits for its response or while a
//! caller pumps notifications. Notifications that arrive while a request
//! is in flight are queued in arrival order and handed out by later
//! [`IpcClient::next_notification`] calls.

use super::error::{IpcError, Result};
use super::framing::{read_frame, write_frame};
use super::protocol::{
    JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, MessageKind, classify_message,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{BufReader, BufWriter};
use tokio::net::UnixStream;
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tracing::{debug, trace, warn};

struct Connection {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

/// A session on one service socket. Dropping it closes the socket.
pub struct IpcClient {
    path: PathBuf,
    connection: Option<Connection>,
    pending: VecDeque<JsonRpcNotification>,
    request_timeout: Duration,
}

impl IpcClient {
    /// Connect to the service socket at `path`.
    pub async fn connect(path: impl AsRef<Path>, request_timeout: Duration) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let stream = UnixStream::connect(&path)
            .await
            .map_err(|source| IpcError::Connect {
                path: path.clone(),
                source,
            })?;
        let (read_half, write_half) = stream.into_split();
        debug!("Connected to {}", path.display());

        Ok(Self {
            path,
            connection: Some(Connection {
                reader: BufReader::new(read_half),
                writer: BufWriter::new(write_half),
            }),
            pending: VecDeque::new(),
            request_timeout,
        })
    }

    /// Send a request and wait for its response.
    ///
    /// `params` serializing to `null` (e.g. `()`) sends no params. The
    /// round trip is bounded by the request timeout; a timed-out or broken
    /// session is closed, since the stream may be mid-frame.
    pub async fn request<R, P>(&mut self, method: &str, params: P) -> Result<R>
    where
        R: DeserializeOwned,
        P: Serialize,
    {
        let params = match serde_json::to_value(params)? {
            serde_json::Value::Null => None,
            value => Some(value),
        };
        let request = JsonRpcRequest::new(method, params);

        let outcome = match tokio::time::timeout(self.request_timeout, self.round_trip(&request))
            .await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(IpcError::Timeout),
        };
        if matches!(
            outcome,
            Err(IpcError::Timeout
                | IpcError::TransportClosed
                | IpcError::Io(_)
                | IpcError::FrameTooLarge { .. })
        ) {
            self.close();
        }

        let result = outcome?;
        serde_json::from_value(result.clone()).map_err(|e| IpcError::Parse {
            error: e.to_string(),
            raw: result.to_string(),
        })
    }

    async fn round_trip(&mut self, request: &JsonRpcRequest) -> Result<serde_json::Value> {
        let connection = self.connection.as_mut().ok_or(IpcError::SessionClosed)?;

        let request_json = serde_json::to_string(request)?;
        trace!("Sending to {}: {}", self.path.display(), request_json);
        write_frame(&mut connection.writer, request_json.as_bytes()).await?;

        loop {
            let body = read_frame(&mut connection.reader).await?;
            let value: serde_json::Value =
                serde_json::from_slice(&body).map_err(|e| IpcError::Parse {
                    error: e.to_string(),
                    raw: String::from_utf8_lossy(&body).into_owned(),
                })?;
            trace!("Received: {}", value);

            match classify_message(&value) {
                MessageKind::Response => {
                    let response: JsonRpcResponse = serde_json::from_value(value)?;
                    if response.id != Some(request.id) {
                        warn!(
                            "Discarding response {:?} while waiting for {}",
                            response.id, request.id
                        );
                        continue;
                    }
                    if let Some(error) = response.error {
                        return Err(IpcError::Rpc {
                            code: error.code,
                            message: error.message,
                        });
                    }
                    return Ok(response.result.unwrap_or(serde_json::Value::Null));
                }
                MessageKind::Notification => {
                    let notification: JsonRpcNotification = serde_json::from_value(value)?;
                    trace!("Queued {} during {}", notification.method, request.method);
                    self.pending.push_back(notification);
                }
                MessageKind::IncomingRequest { id } => {
                    warn!("Ignoring unexpected request {} from daemon", id);
                }
            }
        }
    }

    /// Handle exactly one message: a queued notification if any, else
    /// the next frame from the socket.
    ///
    /// Returns `None` when the frame was not a notification. Not bounded
    /// by the request timeout.
    pub async fn next_notification(&mut self) -> Result<Option<JsonRpcNotification>> {
        if let Some(queued) = self.pending.pop_front() {
            return Ok(Some(queued));
        }

        let connection = self.connection.as_mut().ok_or(IpcError::SessionClosed)?;
        let body = match read_frame(&mut connection.reader).await {
            Ok(body) => body,
            Err(e) => {
                self.close();
                return Err(e);
            }
        };
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| IpcError::Parse {
                error: e.to_string(),
                raw: String::from_utf8_lossy(&body).into_owned(),
            })?;

        match classify_message(&value) {
            MessageKind::Notification => Ok(Some(serde_json::from_value(value)?)),
            other => {
                warn!("Ignoring {:?} frame outside a request", other);
                Ok(None)
            }
        }
    }

    /// Close the socket. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.connection.take().is_some() {
            debug!("Closed {}", self.path.display());
        }
        self.pending.clear();
    }
}
