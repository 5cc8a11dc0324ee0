/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use vkc::v5::{ApiError, ApiParams, Config, Transport, VkError};

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn get_live_config() -> anyhow::Result<Config> {
    Ok(Config::from_env()?)
}

/// A call seen by [`FakeTransport`]
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub method: String,
    pub params: Vec<(String, String)>,
}

#[allow(dead_code)]
impl RecordedCall {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory transport handing out queued replies in order and recording every call
#[allow(dead_code)]
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    replies: Mutex<VecDeque<Result<Value, VkError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, payload: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(payload));
        self
    }

    pub fn fail(self, err: VkError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn call(&self, method: &str, params: &ApiParams<'_>) -> Result<Value, VkError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::InvalidResponse("no reply queued".into()).into()))
    }
}
