//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::http::header;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("user not found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );

    let trace_header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = trace_header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id not valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(trace_header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");

    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("user repository storage failed: lock poisoned")
        .with_trace_id(expected_trace_id.clone());

    let payload = assert_error_response(
        error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn invalid_requests_use_the_envelope() {
    let payload = assert_error_response(
        Error::invalid_request("expected value at line 1 column 1"),
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "expected value at line 1 column 1");
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
#[case("user not found")]
#[case("users not found")]
#[case("Resource Not Found")]
#[actix_web::test]
async fn not_found_errors_answer_with_plain_text(
    expected_trace_id: String,
    #[case] message: &str,
) {
    let error = Error::not_found(message).with_trace_id(expected_trace_id.clone());

    let response = ResponseError::error_response(&error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some(expected_trace_id.as_str())
    );
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    assert_eq!(bytes, message);
}

#[actix_web::test]
async fn json_decode_failures_become_bad_requests() {
    let request = actix_web::test::TestRequest::default().to_http_request();
    let err = json_decode_error(JsonPayloadError::ContentType, &request);

    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload: Error = serde_json::from_slice(&bytes).expect("error envelope");
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), JsonPayloadError::ContentType.to_string());
}
