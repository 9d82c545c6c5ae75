//! Configuration store port
//!
//! Read-only key lookups in the daemon's object database. Only used to
//! learn which quorum provider is active.

use super::error::ServiceError;
use async_trait::async_trait;

/// A session with the configuration store
#[async_trait]
pub trait ConfigStore: Send {
    /// Read `key` under the object at `object_path`.
    ///
    /// Returns `Ok(None)` when the object or key does not exist.
    async fn key_get(
        &mut self,
        object_path: &str,
        key: &str,
    ) -> Result<Option<String>, ServiceError>;

    /// Release the session. Calling it twice is a no-op.
    fn close(&mut self);
}
