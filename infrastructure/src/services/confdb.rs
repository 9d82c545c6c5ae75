//! Configuration store session (`confdb`)

use super::{connect_error, open_session, query_error};
use crate::ipc::protocol::{KeyGetParams, KeyGetResult, status};
use crate::ipc::{IpcClient, IpcError};
use async_trait::async_trait;
use quorumtool_application::{ConfigStore, ServiceError, ServiceKind};
use std::path::Path;
use std::time::Duration;

pub struct IpcConfigStore {
    client: IpcClient,
}

impl IpcConfigStore {
    pub async fn connect(socket_dir: &Path, request_timeout: Duration) -> Result<Self, ServiceError> {
        let client = open_session(socket_dir, ServiceKind::ConfigStore, request_timeout)
            .await
            .map_err(|e| connect_error(ServiceKind::ConfigStore, e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ConfigStore for IpcConfigStore {
    async fn key_get(
        &mut self,
        object_path: &str,
        key: &str,
    ) -> Result<Option<String>, ServiceError> {
        let params = KeyGetParams {
            object: object_path,
            key,
        };
        match self
            .client
            .request::<KeyGetResult, _>("confdb.key_get", params)
            .await
        {
            Ok(result) => Ok(Some(result.value)),
            Err(IpcError::Rpc {
                code: status::NOT_EXIST,
                ..
            }) => Ok(None),
            Err(e) => Err(query_error("confdb_key_get", e)),
        }
    }

    fn close(&mut self) {
        self.client.close();
    }
}
