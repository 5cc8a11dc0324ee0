/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use serde_json::json;
    use vkc::v5::{ApiError, RemoteError, VkError, classify, parse_envelope};

    fn remote_error(code: i64, extra: serde_json::Value) -> RemoteError {
        let mut payload = json!({
            "error_code": code,
            "error_msg": "Something went wrong",
            "request_params": [
                {"key": "oauth", "value": "1"},
                {"key": "method", "value": "users.get"},
                {"key": "user_ids", "value": "1"}
            ]
        });
        if let (Some(obj), Some(extra)) = (payload.as_object_mut(), extra.as_object()) {
            obj.extend(extra.clone());
        }
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn known_codes_map_to_their_variant() {
        let method = "users.get".to_string();
        let table = [
            (5, ApiError::AuthenticationFailed { method: method.clone() }),
            (6, ApiError::TooManyRequests { method: method.clone() }),
            (9, ApiError::FloodControl { method: method.clone() }),
            (10, ApiError::InternalServerError { method: method.clone() }),
            (15, ApiError::AccessDenied { method: method.clone() }),
            (17, ApiError::ValidationRequired { method: method.clone() }),
            (201, ApiError::AccessDenied { method: method.clone() }),
        ];
        for (code, expected) in table {
            assert_eq!(classify(remote_error(code, json!({}))), expected, "code {code}");
        }
    }

    #[test]
    fn unknown_code_is_unclassified_and_untouched() {
        let err = remote_error(100, json!({"extra_field": [1, 2]}));
        match classify(err.clone()) {
            ApiError::Unclassified(inner) => {
                assert_eq!(inner, err);
                assert_eq!(inner.code, 100);
                assert_eq!(inner.message, "Something went wrong");
                assert_eq!(inner.request_params.len(), 3);
                assert_eq!(inner.extra.get("extra_field"), Some(&json!([1, 2])));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn captcha_carries_challenge() {
        let err = remote_error(14, json!({"captcha_sid": "123", "captcha_img": "http://x"}));
        assert_eq!(
            classify(err),
            ApiError::ChallengeRequired {
                method: "users.get".into(),
                captcha_sid: "123".into(),
                captcha_img: "http://x".into(),
            }
        );
    }

    #[test]
    fn captcha_without_sid_is_invalid_response() {
        let err = remote_error(14, json!({"captcha_img": "http://x"}));
        assert!(matches!(classify(err), ApiError::InvalidResponse(_)));

        let err = remote_error(14, json!({"captcha_sid": 123, "captcha_img": "http://x"}));
        assert!(matches!(classify(err), ApiError::InvalidResponse(_)));
    }

    #[test]
    fn method_is_empty_when_not_echoed() {
        let err: RemoteError =
            serde_json::from_value(json!({"error_code": 6, "error_msg": "Too many"})).unwrap();
        assert_eq!(err.method(), "");
        assert_eq!(
            classify(err),
            ApiError::TooManyRequests { method: String::new() }
        );
    }

    #[test]
    fn remote_error_display_names_method() {
        let err = remote_error(100, json!({}));
        assert_eq!(
            err.to_string(),
            "error 100 when executing method 'users.get': Something went wrong"
        );
    }

    #[test]
    fn retryable_variants() {
        let method = String::new();
        assert!(ApiError::TooManyRequests { method: method.clone() }.is_retryable());
        assert!(ApiError::FloodControl { method: method.clone() }.is_retryable());
        assert!(!ApiError::AccessDenied { method }.is_retryable());
        assert!(!ApiError::InvalidResponse("bad".into()).is_retryable());
    }

    #[test]
    fn envelope_with_response() {
        let payload = parse_envelope(br#"{"response": [{"id": 1}]}"#).unwrap();
        assert_eq!(payload, json!([{"id": 1}]));
    }

    #[test]
    fn envelope_with_error_is_classified() {
        let body = br#"{"error": {"error_code": 9, "error_msg": "Flood control",
            "request_params": [{"key": "method", "value": "audio.get"}]}}"#;
        match parse_envelope(body) {
            Err(VkError::Api(ApiError::FloodControl { method })) => assert_eq!(method, "audio.get"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_envelope_is_invalid_response() {
        assert!(matches!(
            parse_envelope(b"<html>not json</html>"),
            Err(VkError::Api(ApiError::InvalidResponse(_)))
        ));
        assert!(matches!(
            parse_envelope(b"{}"),
            Err(VkError::Api(ApiError::InvalidResponse(_)))
        ));
    }
}
