//! Users API handlers.
//!
//! ```text
//! GET    /users/        list every user (404 when there are none)
//! GET    /users/{id}    fetch one user
//! POST   /users/        {"name":"Ada","email":"ada@example.com"}
//! PUT    /users/{id}    {"name":"Ada Lovelace"}
//! DELETE /users/{id}
//! ```
//!
//! Routing is by HTTP method on the `/users` prefix. The identifier is the
//! third `/`-separated segment of the request path; an empty or missing
//! segment means "no identifier".

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Resource, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Error, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::json_decode_error;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users/` and `PUT /users/{id}`.
///
/// Only decoding is enforced: a missing `name` decodes as the empty string.
/// Unknown fields, including any client-supplied `id`, are ignored.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserPayload {
    /// Display name.
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl From<UserPayload> for UserDraft {
    fn from(value: UserPayload) -> Self {
        Self::new(value.name, value.email)
    }
}

/// Identifier carried by the third `/`-separated segment of `path`.
///
/// # Examples
/// ```
/// use users_api::inbound::http::users::user_id_from_path;
///
/// assert_eq!(user_id_from_path("/users/7").map(|id| id.to_string()), Some("7".to_owned()));
/// assert!(user_id_from_path("/users/").is_none());
/// assert!(user_id_from_path("/users").is_none());
/// ```
pub fn user_id_from_path(path: &str) -> Option<UserId> {
    path.split('/')
        .nth(2)
        .filter(|segment| !segment.is_empty())
        .map(UserId::new)
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_decode_error)
}

fn users_resource(path: &str) -> Resource {
    web::resource(path)
        .app_data(json_config())
        .route(web::get().to(get_users))
        .route(web::post().to(create_user))
        .route(web::put().to(update_user))
        .route(web::delete().to(delete_user))
        .default_service(web::to(method_not_allowed))
}

/// Register the users resource on both `/users` and `/users/...`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users_resource("/users"))
        .service(users_resource("/users/{tail:.*}"));
}

/// List users, or fetch one when the path carries an identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier; leave empty to list every user")),
    responses(
        (status = 200, description = "The user, or every user when no identifier is given", body = [UserSchema]),
        (status = 404, description = "User not found, or no users stored", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUsers"
)]
pub async fn get_users(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    if let Some(id) = user_id_from_path(request.path()) {
        let user = state.users.get_by_id(&id).await?;
        return Ok(HttpResponse::Ok().json(user));
    }

    let users = state.users.get_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Create a user with a server-assigned identifier.
#[utoipa::path(
    post,
    path = "/users/",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Malformed request body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let user = state.users.save(payload.into_inner().into()).await?;
    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created().json(user))
}

/// Replace the user named by the path in full.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User replaced"),
        (status = 400, description = "Malformed request body", body = ErrorSchema),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    // An absent identifier matches no record.
    let id = user_id_from_path(request.path()).unwrap_or_else(|| UserId::new(""));
    state.users.update(&id, payload.into_inner().into()).await?;
    info!(user_id = %id, "user updated");
    Ok(HttpResponse::Ok().finish())
}

/// Delete the user named by the path.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Missing identifier or user not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let Some(id) = user_id_from_path(request.path()) else {
        return Err(Error::not_found("Resource Not Found"));
    };
    state.users.delete(&id).await?;
    info!(user_id = %id, "user deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Reject any other method on the users resource.
async fn method_not_allowed(request: HttpRequest) -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .content_type(ContentType::plaintext())
        .body(format!("{} not allowed.", request.method()))
}

#[cfg(test)]
mod tests;
