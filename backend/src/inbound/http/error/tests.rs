//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] expected: StatusCode) {
    assert_eq!(status_for(code), expected);
    assert_eq!(
        ResponseError::status_code(&Error::new(code, "failure")),
        expected
    );
}

async fn render(error: Error, expected_status: StatusCode) -> (Option<String>, String) {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));

    let trace_header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    (trace_header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("connection string postgres://secret")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let (header, body) = render(error, StatusCode::INTERNAL_SERVER_ERROR).await;

    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert!(body.contains("Internal server error"));
    assert!(!body.contains("postgres"));
    assert!(body.contains(&expected_trace_id));
}

#[rstest]
#[actix_web::test]
async fn not_found_errors_keep_their_message(expected_trace_id: String) {
    let error = Error::not_found("feeding record 9 not found").with_trace_id(expected_trace_id);

    let (_, body) = render(error, StatusCode::NOT_FOUND).await;

    assert!(body.contains("404 Not Found"));
    assert!(body.contains("feeding record 9 not found"));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::invalid_request("bad").with_details(json!({"field": "horaComida"}));

    let (header, body) = render(error, StatusCode::BAD_REQUEST).await;

    assert!(header.is_none());
    assert!(body.contains("horaComida"));
    assert!(!body.contains("trace-id:"));
}

#[rstest]
fn redaction_leaves_client_errors_untouched() {
    let error = Error::invalid_request("bad").with_details(json!({"field": "horaComida"}));
    assert_eq!(redact_if_internal(&error), error);
}
