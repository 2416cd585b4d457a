//! Driving port for user use-cases.
//!
//! Inbound adapters (HTTP handlers) call this port without importing any
//! storage concerns. Production backs it with [`crate::domain::UserService`];
//! handler tests use the generated mock.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for managing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// List every user; fails with a not-found error when there are none.
    async fn get_all(&self) -> Result<Vec<User>, Error>;

    /// Fetch a single user.
    async fn get_by_id(&self, id: &UserId) -> Result<User, Error>;

    /// Assign an identifier to the draft and store it.
    async fn save(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace the user matching `id` with the draft.
    async fn update(&self, id: &UserId, draft: UserDraft) -> Result<(), Error>;

    /// Remove the user matching `id`.
    async fn delete(&self, id: &UserId) -> Result<(), Error>;
}
