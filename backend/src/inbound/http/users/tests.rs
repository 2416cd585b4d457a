//! Tests for users API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::ports::MockUsersService;
use crate::domain::{User, UserService};
use crate::outbound::memory::InMemoryUserRepository;

fn seeded_state() -> HttpState {
    let repository = InMemoryUserRepository::with_users([
        User::new(UserId::new("1"), "Emerson Lugo", None),
        User::new(
            UserId::new("2"),
            "Mister Rust",
            Some("rust@example.com".to_owned()),
        ),
    ]);
    HttpState::new(Arc::new(UserService::new(Arc::new(repository))))
}

fn empty_state() -> HttpState {
    HttpState::new(Arc::new(UserService::new(Arc::new(
        InMemoryUserRepository::new(),
    ))))
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}

async fn json_body(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

async fn text_body(response: actix_web::dev::ServiceResponse) -> String {
    let body = actix_test::read_body(response).await;
    String::from_utf8(body.to_vec()).expect("UTF-8 body")
}

#[rstest]
#[case("/users/7", Some("7"))]
#[case("/users/abc/extra", Some("abc"))]
#[case("/users/", None)]
#[case("/users", None)]
fn extracts_identifier_from_third_segment(#[case] path: &str, #[case] expected: Option<&str>) {
    let id = user_id_from_path(path).map(|id| id.to_string());
    assert_eq!(id.as_deref(), expected);
}

#[rstest]
#[case("/users/")]
#[case("/users")]
#[actix_web::test]
async fn lists_every_user(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = json_body(response).await;
    let users = value.as_array().expect("array body");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "Emerson Lugo");
    assert!(users[0].get("email").is_none());
    assert_eq!(users[1]["email"], "rust@example.com");
}

#[actix_web::test]
async fn empty_collection_is_not_found() {
    let app = actix_test::init_service(test_app(empty_state())).await;
    let request = actix_test::TestRequest::get().uri("/users/").to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text_body(response).await, "users not found");
}

#[rstest]
#[case("/users/2", StatusCode::OK)]
#[case("/users/42", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn fetches_single_user(#[case] uri: &str, #[case] expected: StatusCode) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), expected);
    if expected == StatusCode::OK {
        let value = json_body(response).await;
        assert_eq!(value["id"], "2");
        assert_eq!(value["name"], "Mister Rust");
    } else {
        assert_eq!(text_body(response).await, "user not found");
    }
}

#[actix_web::test]
async fn creates_user_with_assigned_identifier() {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/users/")
        .set_json(&UserPayload {
            name: "Patrick".into(),
            email: Some("patrick@example.com".into()),
        })
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let value = json_body(response).await;
    assert_eq!(value["id"], "3");
    assert_eq!(value["name"], "Patrick");
    assert_eq!(value["email"], "patrick@example.com");
}

#[actix_web::test]
async fn create_ignores_client_identifier_and_missing_content_type() {
    let app = actix_test::init_service(test_app(empty_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/users/")
        .set_payload(r#"{"id":"99","name":"Grace","role":"admin"}"#)
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let value = json_body(response).await;
    assert_eq!(value["id"], "1");
    assert_eq!(value["name"], "Grace");
}

#[rstest]
#[case(actix_test::TestRequest::post().uri("/users/"))]
#[case(actix_test::TestRequest::put().uri("/users/1"))]
#[actix_web::test]
async fn malformed_body_is_bad_request(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = request
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = json_body(response).await;
    assert_eq!(value["code"], "invalid_request");
}

#[actix_web::test]
async fn update_replaces_record_and_keeps_path_identifier() {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let update = actix_test::TestRequest::put()
        .uri("/users/1")
        .set_payload(r#"{"id":"77","name":"Emerson"}"#)
        .to_request();

    let response = actix_test::call_service(&app, update).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    assert!(body.is_empty());

    let fetch = actix_test::TestRequest::get().uri("/users/1").to_request();
    let value = json_body(actix_test::call_service(&app, fetch).await).await;
    assert_eq!(value["id"], "1");
    assert_eq!(value["name"], "Emerson");
    assert!(value.get("email").is_none());
}

#[rstest]
#[case("/users/42")]
#[case("/users/")]
#[actix_web::test]
async fn update_of_unknown_user_is_not_found(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::put()
        .uri(uri)
        .set_json(&UserPayload {
            name: "Nobody".into(),
            email: None,
        })
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text_body(response).await, "user not found");
}

#[actix_web::test]
async fn deletes_user() {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::delete().uri("/users/2").to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetch = actix_test::TestRequest::get().uri("/users/2").to_request();
    let response = actix_test::call_service(&app, fetch).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case("/users/", "Resource Not Found")]
#[case("/users/42", "user not found")]
#[actix_web::test]
async fn delete_failures_are_not_found(#[case] uri: &str, #[case] message: &str) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = actix_test::TestRequest::delete().uri(uri).to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text_body(response).await, message);
}

#[rstest]
#[case(actix_test::TestRequest::patch(), "PATCH not allowed.")]
#[case(actix_test::TestRequest::default().method(actix_web::http::Method::OPTIONS), "OPTIONS not allowed.")]
#[actix_web::test]
async fn other_methods_are_rejected(#[case] request: actix_test::TestRequest, #[case] expected: &str) {
    let app = actix_test::init_service(test_app(seeded_state())).await;
    let request = request.uri("/users/1").to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = actix_test::read_body(response).await;
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn internal_failures_are_redacted() {
    let mut users = MockUsersService::new();
    users
        .expect_get_all()
        .times(1)
        .return_once(|| Err(Error::internal("lock poisoned")));
    let app = actix_test::init_service(test_app(HttpState::new(Arc::new(users)))).await;
    let request = actix_test::TestRequest::get().uri("/users/").to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let value = json_body(response).await;
    assert_eq!(value["code"], "internal_error");
    assert_eq!(value["message"], "Internal server error");
}

#[actix_web::test]
async fn create_forwards_draft_to_service() {
    let mut users = MockUsersService::new();
    users
        .expect_save()
        .withf(|draft| draft.name.is_empty() && draft.email.is_none())
        .times(1)
        .return_once(|_| Ok(User::new(UserId::new("1"), "", None)));
    let app = actix_test::init_service(test_app(HttpState::new(Arc::new(users)))).await;
    let request = actix_test::TestRequest::post()
        .uri("/users/")
        .set_payload("{}")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["name"], "");
}
