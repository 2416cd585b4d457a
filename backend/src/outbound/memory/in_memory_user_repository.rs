//! In-memory `UserRepository` implementation.
//!
//! Records live in a vector behind a [`RwLock`]: lookups take a shared lock,
//! mutations an exclusive one. Guards are never held across an `.await`.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Vector-backed implementation of the `UserRepository` port.
///
/// # Examples
/// ```
/// use users_api::domain::{User, UserId};
/// use users_api::outbound::memory::InMemoryUserRepository;
///
/// let repository = InMemoryUserRepository::with_users([User::new(UserId::new("1"), "Ada", None)]);
/// # let _ = repository;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with `users`, in iteration order.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, UserRepositoryError> {
        self.users.read().map_err(map_poison_error)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, UserRepositoryError> {
        self.users.write().map_err(map_poison_error)
    }
}

fn map_poison_error<T>(_: PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::storage("user collection lock poisoned")
}

fn not_found(id: &UserId) -> UserRepositoryError {
    debug!(user_id = %id, "user not found");
    UserRepositoryError::user_not_found(id.as_str())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.read()?;
        if users.is_empty() {
            debug!("users not found");
            return Err(UserRepositoryError::no_users_found());
        }
        Ok(users.clone())
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        self.read()?
            .iter()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn save(&self, user: User) -> Result<User, UserRepositoryError> {
        self.write()?.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &UserId, user: User) -> Result<(), UserRepositoryError> {
        let mut users = self.write()?;
        let slot = users
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| not_found(id))?;
        *slot = user.with_id(id.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let mut users = self.write()?;
        let before = users.len();
        users.retain(|user| user.id() != id);
        if users.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, UserRepositoryError> {
        Ok(self.read()?.len())
    }
}
