//! Builders for HTTP state backed by the in-memory repository.

use std::sync::Arc;

use actix_web::web;

use users_api::domain::UserService;
use users_api::inbound::http::state::HttpState;
use users_api::outbound::memory::InMemoryUserRepository;

use super::ServerConfig;

/// Build handler state over a fresh, empty user collection.
///
/// The collection lives for the whole process and is shared by every worker.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = UserService::with_strategy(repository, config.id_strategy());
    web::Data::new(HttpState::new(Arc::new(service)))
}
