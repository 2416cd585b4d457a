//! User domain service.
//!
//! Implements the [`UsersService`] driving port on top of any
//! [`UserRepository`]. Beyond identifier assignment on creation every
//! operation is a pass-through; repository failures keep their kind and text
//! when translated into domain errors.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersService};
use crate::domain::{Error, IdStrategy, User, UserDraft, UserId};

#[derive(Debug)]
enum IdAllocator {
    CollectionSize,
    /// Last identifier handed out.
    Monotonic(AtomicU64),
}

impl IdAllocator {
    fn next(&self, count: usize) -> UserId {
        let floor = u64::try_from(count).unwrap_or(u64::MAX);
        match self {
            Self::CollectionSize => UserId::from(floor.saturating_add(1)),
            Self::Monotonic(last) => {
                let (Ok(previous) | Err(previous)) =
                    last.fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                        Some(current.max(floor).saturating_add(1))
                    });
                UserId::from(previous.max(floor).saturating_add(1))
            }
        }
    }
}

impl From<IdStrategy> for IdAllocator {
    fn from(strategy: IdStrategy) -> Self {
        match strategy {
            IdStrategy::CollectionSize => Self::CollectionSize,
            IdStrategy::Monotonic => Self::Monotonic(AtomicU64::new(0)),
        }
    }
}

/// User service implementing the driving port.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use users_api::domain::ports::UsersService;
/// use users_api::domain::{UserDraft, UserService};
/// use users_api::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
/// let user = service.save(UserDraft::new("Ada", None)).await.expect("saved");
/// assert_eq!(user.id().as_str(), "1");
/// # });
/// ```
#[derive(Debug)]
pub struct UserService<R> {
    repository: Arc<R>,
    ids: IdAllocator,
}

impl<R> UserService<R> {
    /// Create a service using the default [`IdStrategy::CollectionSize`].
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_strategy(repository, IdStrategy::default())
    }

    /// Create a service with an explicit identifier strategy.
    pub fn with_strategy(repository: Arc<R>, strategy: IdStrategy) -> Self {
        Self {
            repository,
            ids: IdAllocator::from(strategy),
        }
    }

    /// The identifier strategy in effect.
    pub fn id_strategy(&self) -> IdStrategy {
        match self.ids {
            IdAllocator::CollectionSize => IdStrategy::CollectionSize,
            IdAllocator::Monotonic(_) => IdStrategy::Monotonic,
        }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::UserNotFound { .. } | UserRepositoryError::NoUsersFound => {
            Error::not_found(error.to_string())
        }
        UserRepositoryError::Storage { .. } => {
            error!(%error, "user repository failure");
            Error::internal(error.to_string())
        }
    }
}

#[async_trait]
impl<R> UsersService for UserService<R>
where
    R: UserRepository,
{
    async fn get_all(&self) -> Result<Vec<User>, Error> {
        self.repository
            .get_all()
            .await
            .map_err(map_repository_error)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, Error> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn save(&self, draft: UserDraft) -> Result<User, Error> {
        let count = self
            .repository
            .count()
            .await
            .map_err(map_repository_error)?;
        let id = self.ids.next(count);
        self.repository
            .save(User::from_draft(id, draft))
            .await
            .map_err(map_repository_error)
    }

    async fn update(&self, id: &UserId, draft: UserDraft) -> Result<(), Error> {
        self.repository
            .update(id, User::from_draft(id.clone(), draft))
            .await
            .map_err(map_repository_error)
    }

    async fn delete(&self, id: &UserId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
