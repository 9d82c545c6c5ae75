//! Shared helpers for use cases.

use crate::ports::error::ServiceError;
use tracing::error;

/// Log a failed daemon call with the operation name and status code.
///
/// Falls back to the error text when the daemon supplied no code.
pub(crate) fn log_failure(op: &str, err: &ServiceError) {
    match err.status_code() {
        Some(code) => error!("{} FAILED: {}", op, code),
        None => error!("{} FAILED: {}", op, err),
    }
}
