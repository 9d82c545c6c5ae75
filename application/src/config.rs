//! Application-level runtime options

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Bounds for the blocking wait on a membership notification.
///
/// The default waits forever, like the daemon's own client library does.
#[derive(Debug, Clone, Default)]
pub struct WaitOptions {
    /// Give up after this long; `None` waits forever
    pub timeout: Option<Duration>,
    /// Abort the wait when cancelled (e.g. on Ctrl-C)
    pub cancellation: Option<CancellationToken>,
}

impl WaitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}
