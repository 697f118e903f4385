use crate::ClientError;

use cb_core::CoreError;

#[test]
fn given_validation_error_when_user_message_then_names_field() {
    let err: ClientError = CoreError::validation("temperature", "must be 0-2, got 3").into();

    assert_eq!(err.user_message(), "temperature: must be 0-2, got 3");
    assert!(err.status().is_none());
}

#[test]
fn given_api_error_when_user_message_then_server_message() {
    let err = ClientError::api(409, "CONFLICT", "Slug already exists");

    assert_eq!(err.user_message(), "Slug already exists");
    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("CONFLICT"));
}

#[test]
fn given_refresh_failed_when_checked_then_session_expired() {
    let err = ClientError::refresh_failed("refresh rejected");

    assert!(err.is_session_expired());
    assert!(err.user_message().contains("sign in again"));
}

#[test]
fn given_server_error_when_user_message_then_generic_text() {
    let err = ClientError::server(500, "Traceback (most recent call last)");

    assert!(!err.user_message().contains("Traceback"));
    assert!(!err.is_session_expired());
}
