/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::{ApiError, RemoteError, VkError, classify};
use crate::v5::Config;
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;
use strum_macros::IntoStaticStr;

// Root VK API
pub const API_ORIGIN: &str = "https://api.vk.com/method";

// Protocol version sent with every call
pub const API_VERSION: &str = "5.60";

pub const DEFAULT_USER_AGENT: &str =
    "com.vk.vkclient/10 (unknown, iPhone OS 9.2, iPhone, Scale/2.000000)";

/// This can be filter types as well as other parameters the specific API expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Remote methods this library knows how to call.
///
/// Generated execute scripts only ever reference methods from this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum ApiMethod {
    #[strum(serialize = "users.get")]
    UsersGet,
    #[strum(serialize = "audio.get")]
    AudioGet,
    #[strum(serialize = "video.get")]
    VideoGet,
    #[strum(serialize = "execute")]
    Execute,
}

impl ApiMethod {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Something that can issue a single remote call and hand back the decoded `response`
/// payload, or the classified error.
///
/// [`ApiClient`] is the HTTP implementation. Anything else (a recording fake in tests,
/// a proxy) can be plugged into [`crate::v5::Client::with_transport`].
pub trait Transport: Send + Sync {
    fn call(
        &self,
        method: &str,
        params: &ApiParams<'_>,
    ) -> impl Future<Output = Result<Value, VkError>> + Send;

    /// Runs a VKScript program server side and returns its `return` value
    fn execute(&self, code: &str) -> impl Future<Output = Result<Value, VkError>> + Send {
        async move { self.call(ApiMethod::Execute.as_str(), &[("code", code)]).await }
    }
}

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    config: Config,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new VK client instance from the provided configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            https_client: reqwest::Client::new(),
        }
    }

    fn method_url(&self, method: &str, params: &ApiParams<'_>) -> Result<reqwest::Url, VkError> {
        let mut common: Vec<(&str, &str)> = vec![("v", self.config.api_version.as_str())];
        if !self.config.access_token.is_empty() {
            common.push(("access_token", self.config.access_token.as_str()));
        }
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), method);
        Ok(reqwest::Url::parse_with_params(
            &url,
            common.iter().chain(params.iter()),
        )?)
    }
}

impl Transport for ApiClient {
    async fn call(&self, method: &str, params: &ApiParams<'_>) -> Result<Value, VkError> {
        let req_url = self.method_url(method, params)?;
        log::debug!("Calling VK method {method} with {} params", params.len());

        let resp = self
            .https_client
            .get(req_url)
            .header(reqwest::header::USER_AGENT, self.config.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        // Body is always read in full so the connection goes back to the pool
        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(VkError::HttpStatus {
                status: status.as_u16(),
                method: method.to_string(),
            });
        }

        parse_envelope(&body)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish()
    }
}

// Base expected response body to be returned from the API
#[derive(Deserialize, Debug)]
struct ResponseEnvelope {
    error: Option<RemoteError>,
    response: Option<Value>,
}

/// Decodes a raw response body into its `response` payload or classified error
pub fn parse_envelope(body: &[u8]) -> Result<Value, VkError> {
    let envelope: ResponseEnvelope = serde_json::from_slice(body).map_err(|err| {
        log::error!("Api Malformed Err {:?}", err);
        ApiError::InvalidResponse(err.to_string())
    })?;

    if let Some(err) = envelope.error {
        log::warn!("{err}");
        return Err(classify(err).into());
    }

    envelope
        .response
        .ok_or_else(|| ApiError::InvalidResponse("expected response missing".to_string()).into())
}
