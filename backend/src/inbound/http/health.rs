//! Health endpoints: the `/ping` liveness check plus readiness and liveness
//! probes for orchestrators and load balancers.
use actix_web::{HttpResponse, Resource, get, http::header, web};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Body returned by `GET /ping`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PingResponse {
    /// Always `pong`.
    #[schema(example = "pong")]
    message: String,
}

/// Liveness check. Always answers `{"message":"pong"}`, whatever the state of
/// the user collection or the request method.
#[utoipa::path(
    get,
    path = "/ping",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is reachable", body = PingResponse)
    )
)]
pub async fn ping() -> web::Json<PingResponse> {
    web::Json(PingResponse {
        message: "pong".to_owned(),
    })
}

/// `/ping` resource answering every method with [`ping`].
pub fn ping_resource() -> Resource {
    web::resource("/ping").to(ping)
}

/// Readiness probe. Return 200 once the listener is bound; return 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Return 200 while the process is marked alive and 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}
