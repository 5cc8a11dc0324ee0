/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v5::errors::{ApiError, VkError};
use crate::v5::{
    ApiClient, ApiMethod, ApiParams, AudioApi, BatchScript, Config, Transport, UsersApi, VideoApi,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Entry point of the library.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), vkc::v5::VkError> {
///     use vkc::v5::Client;
///     let client = Client::new("access token");
///     let _durov = client.users().get(1).await?;
///     let _songs = client.audio().get_all(1).await?;
/// #   Ok(())
/// # }
/// ```
///
/// Cloning is cheap, clones share the same transport.
#[derive(Debug)]
pub struct Client<T = ApiClient> {
    transport: Arc<T>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl Client<ApiClient> {
    pub fn new(access_token: &str) -> Self {
        Self::from_config(Config::new(access_token))
    }

    pub fn from_config(config: Config) -> Self {
        Self::with_transport(ApiClient::new(config))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn users(&self) -> UsersApi<'_, T> {
        UsersApi::new(self)
    }

    pub fn audio(&self) -> AudioApi<'_, T> {
        AudioApi::new(self)
    }

    pub fn video(&self) -> VideoApi<'_, T> {
        VideoApi::new(self)
    }

    /// Calls a single remote method and decodes its `response` payload
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: ApiMethod,
        params: &ApiParams<'_>,
    ) -> Result<R, VkError> {
        let payload = self.transport.call(method.as_str(), params).await?;
        decode_payload(payload)
    }

    /// Runs a generated batch script as one `execute` round trip
    pub async fn execute<R: DeserializeOwned>(&self, script: &BatchScript) -> Result<R, VkError> {
        let code = script.to_string();
        log::debug!("Executing batch script over {} ids ({} bytes)", script.len(), code.len());
        log::trace!("{code}");
        let payload = self.transport.execute(&code).await?;
        decode_payload(payload)
    }
}

fn decode_payload<R: DeserializeOwned>(payload: serde_json::Value) -> Result<R, VkError> {
    serde_json::from_value(payload)
        .map_err(|err| ApiError::InvalidResponse(err.to_string()).into())
}
