//! Port abstraction for user storage adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// No record carries the requested identifier.
        UserNotFound { id: String } => "user not found",
        /// The collection holds no records at all.
        NoUsersFound => "users not found",
        /// The backing store could not be accessed.
        Storage { message: String } => "user repository storage failed: {message}",
    }
}

/// Driven port owning the user collection.
///
/// Implementations keep insertion order: `get_all` returns records in the
/// order they were saved, and `delete` preserves the relative order of the
/// records that remain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored record, failing with
    /// [`UserRepositoryError::NoUsersFound`] when the collection is empty.
    async fn get_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch the record with a matching identifier.
    async fn get_by_id(&self, id: &UserId) -> Result<User, UserRepositoryError>;

    /// Append a record and return it as stored.
    async fn save(&self, user: User) -> Result<User, UserRepositoryError>;

    /// Replace the record matching `id` in full.
    ///
    /// The stored record keeps `id` as its identifier whatever identifier the
    /// supplied record carries.
    async fn update(&self, id: &UserId, user: User) -> Result<(), UserRepositoryError>;

    /// Remove the record matching `id`.
    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, UserRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UserRepositoryError::user_not_found("7"), "user not found")]
    #[case(UserRepositoryError::no_users_found(), "users not found")]
    #[case(
        UserRepositoryError::storage("lock poisoned"),
        "user repository storage failed: lock poisoned"
    )]
    fn error_messages_are_stable(#[case] error: UserRepositoryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
