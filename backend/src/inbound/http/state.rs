//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a real repository.

use std::sync::Arc;

use crate::domain::ports::UsersService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User use-cases.
    pub users: Arc<dyn UsersService>,
}

impl HttpState {
    /// Construct state from the users port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_api::domain::UserService;
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
    /// let state = HttpState::new(Arc::new(service));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UsersService>) -> Self {
        Self { users }
    }
}
