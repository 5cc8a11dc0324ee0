/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::VkError;
use crate::v5::{API_ORIGIN, API_VERSION, DEFAULT_USER_AGENT};

pub const ACCESS_TOKEN_ENV: &str = "VK_ACCESS_TOKEN";
pub const USER_AGENT_ENV: &str = "VK_USER_AGENT";
pub const API_VERSION_ENV: &str = "VK_API_VERSION";
pub const BASE_URL_ENV: &str = "VK_API_BASE_URL";

/// Settings used by [`crate::v5::ApiClient`] for every request.
///
/// Getting the access token is left up to the consumer of this library.
#[derive(Clone)]
pub struct Config {
    pub access_token: String,
    pub user_agent: String,
    pub api_version: String,
    pub base_url: String,
}

impl Config {
    pub fn new(access_token: &str) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Builds the configuration from `VK_ACCESS_TOKEN` and the optional
    /// `VK_USER_AGENT`, `VK_API_VERSION` and `VK_API_BASE_URL` variables
    pub fn from_env() -> Result<Self, VkError> {
        let access_token = std::env::var(ACCESS_TOKEN_ENV)
            .map_err(|_| VkError::MissingConfig(ACCESS_TOKEN_ENV.to_string()))?;

        let mut config = Self::new(&access_token);
        if let Ok(user_agent) = std::env::var(USER_AGENT_ENV) {
            config.user_agent = user_agent;
        }
        if let Ok(api_version) = std::env::var(API_VERSION_ENV) {
            config.api_version = api_version;
        }
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Points the client somewhere other than the public API, e.g. a local mock server
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            user_agent: DEFAULT_USER_AGENT.into(),
            api_version: API_VERSION.into(),
            base_url: API_ORIGIN.into(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"xxx")
            .field("user_agent", &self.user_agent)
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .finish()
    }
}
