//! Users API entry-point: loads configuration, serves the REST endpoints, and
//! drains on interrupt.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_api::inbound::http::health::HealthState;
use users_api::settings::AppSettings;

#[allow(
    clippy::print_stderr,
    reason = "no subscriber is installed when initialisation fails"
)]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        eprintln!("tracing init failed: {e}");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    info!(
        bind_addr = %config.bind_addr(),
        id_strategy = %config.id_strategy(),
        "starting users API"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();

    actix_web::rt::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for interrupt signal");
            return;
        }
        health_state.mark_unhealthy();
        info!(cause = "interrupt signal received", "terminated");
        handle.stop(true).await;
    });

    let result = server.await;
    if let Err(e) = &result {
        error!(error = %e, "terminated");
    }
    result
}
