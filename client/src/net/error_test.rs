use super::*;
use serde_json::json;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Http { status: 422, payload: json!({ "message": "Email already taken" }) };
    assert_eq!(err.user_message("Invalid credentials"), "Email already taken");
}

#[test]
fn user_message_falls_back_without_message() {
    let err = ApiError::Http { status: 500, payload: json!({ "error": "boom" }) };
    assert_eq!(err.user_message("Invalid credentials"), "Invalid credentials");

    let blank = ApiError::Http { status: 400, payload: json!({ "message": "  " }) };
    assert_eq!(blank.user_message("fallback"), "fallback");

    let network = ApiError::Network("offline".to_owned());
    assert_eq!(network.user_message("fallback"), "fallback");
}

#[test]
fn is_unauthorized_only_for_401() {
    assert!(ApiError::Http { status: 401, payload: serde_json::Value::Null }.is_unauthorized());
    assert!(!ApiError::Http { status: 403, payload: serde_json::Value::Null }.is_unauthorized());
    assert!(!ApiError::Network("x".to_owned()).is_unauthorized());
}

#[test]
fn display_includes_status() {
    let err = ApiError::Http { status: 404, payload: serde_json::Value::Null };
    assert_eq!(err.to_string(), "request failed with status 404");
}
