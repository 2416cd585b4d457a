//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint (users, ping, health) together
//! with the schema wrappers that describe domain types without coupling them
//! to utoipa. The document backs Swagger UI in debug builds and the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::UserPayload;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "In-memory users CRUD service with liveness and readiness probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserPayload, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
