/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use num_enum::TryFromPrimitive;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum VkError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {status} returned when executing method '{method}'")]
    HttpStatus { status: u16, method: String },

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("count should be between 1 and {max}, got {count}")]
    CountOutOfRange { count: u32, max: u32 },

    #[error("batch size can't be more than {max}, got {size}")]
    BatchTooLarge { size: usize, max: usize },

    #[error("invalid id range: from {from} is greater than to {to}")]
    InvalidRange { from: i64, to: i64 },

    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

/// Error codes per the VK API error reference that have a dedicated [`ApiError`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(i64)]
pub enum ApiErrorCode {
    AuthFailed = 5,
    TooManyRequests = 6,
    FloodControl = 9,
    InternalServerError = 10,
    CaptchaNeeded = 14,
    AccessDenied = 15,
    NeedValidation = 17,
    AudioAccessDenied = 201,
}

/// Classified outcome of a failed remote call.
///
/// Callers match on the variant to decide whether to retry later, prompt a human
/// (see [`ApiError::ChallengeRequired`]) or give up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("too many requests when executing method '{method}'")]
    TooManyRequests { method: String },

    #[error("flood control when executing method '{method}'")]
    FloodControl { method: String },

    #[error("authorization failed when executing method '{method}'")]
    AuthenticationFailed { method: String },

    #[error("token needs validation when executing method '{method}'")]
    ValidationRequired { method: String },

    #[error("access denied when executing method '{method}'")]
    AccessDenied { method: String },

    #[error("internal server error when executing method '{method}'")]
    InternalServerError { method: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The call must be replayed with the solved captcha. `captcha_img` is the
    /// image to show the user, `captcha_sid` identifies the challenge.
    #[error("captcha needed when executing method '{method}'")]
    ChallengeRequired {
        method: String,
        captcha_sid: String,
        captcha_img: String,
    },

    #[error("{0}")]
    Unclassified(RemoteError),
}

impl ApiError {
    /// True for transient server side conditions that may succeed if the same call is
    /// issued again later. No retry is ever attempted by this library.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::TooManyRequests { .. }
                | ApiError::FloodControl { .. }
                | ApiError::InternalServerError { .. }
        )
    }
}

/// A single `{key, value}` pair echoed back in `request_params`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestParam {
    pub key: String,
    pub value: String,
}

/// Raw `error` object of the response envelope.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RemoteError {
    #[serde(rename = "error_code")]
    pub code: i64,

    #[serde(default, rename = "error_msg")]
    pub message: String,

    #[serde(default)]
    pub request_params: Vec<RequestParam>,

    // Everything the service sent besides the fields above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoteError {
    /// Name of the failing method, or `""` when the service didn't echo it
    pub fn method(&self) -> &str {
        self.request_params
            .iter()
            .find(|param| param.key == "method")
            .map_or("", |param| param.value.as_str())
    }

    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error {} when executing method '{}': {}",
            self.code,
            self.method(),
            self.message
        )
    }
}

impl std::error::Error for RemoteError {}

/// Maps a remote error payload onto its [`ApiError`] variant.
pub fn classify(err: RemoteError) -> ApiError {
    use ApiErrorCode as C;

    let code = match ApiErrorCode::try_from(err.code) {
        Ok(code) => code,
        Err(_) => return ApiError::Unclassified(err),
    };
    let method = err.method().to_string();

    match code {
        C::AuthFailed => ApiError::AuthenticationFailed { method },
        C::TooManyRequests => ApiError::TooManyRequests { method },
        C::FloodControl => ApiError::FloodControl { method },
        C::InternalServerError => ApiError::InternalServerError { method },
        C::AccessDenied | C::AudioAccessDenied => ApiError::AccessDenied { method },
        C::NeedValidation => ApiError::ValidationRequired { method },
        C::CaptchaNeeded => match (err.extra_str("captcha_sid"), err.extra_str("captcha_img")) {
            (Some(sid), Some(img)) => ApiError::ChallengeRequired {
                captcha_sid: sid.to_string(),
                captcha_img: img.to_string(),
                method,
            },
            _ => ApiError::InvalidResponse(format!(
                "captcha error for method '{method}' is missing captcha_sid or captcha_img"
            )),
        },
    }
}

impl From<RemoteError> for ApiError {
    fn from(err: RemoteError) -> Self {
        classify(err)
    }
}
