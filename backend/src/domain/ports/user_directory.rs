//! Driving port for the user directory use-cases.
//!
//! HTTP handlers call this port to list, fetch, create, update and delete
//! user records without knowing which adapter holds them. Implementations
//! must serialise mutations so id uniqueness holds under concurrent requests.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{Error, User, UserDraft, UserId};

/// Failures raised by user directory adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserDirectoryError {
    /// No stored record carries the requested id.
    #[error("user {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: UserId,
    },
    /// A stored record already carries the requested id.
    #[error("user {id} already exists")]
    Conflict {
        /// The id that collided.
        id: UserId,
    },
    /// No further id can be assigned without overflowing.
    #[error("user id space exhausted")]
    IdsExhausted,
}

impl UserDirectoryError {
    /// Lookup failure for `id`.
    pub fn not_found(id: impl Into<UserId>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Uniqueness failure for `id`.
    pub fn conflict(id: impl Into<UserId>) -> Self {
        Self::Conflict { id: id.into() }
    }
}

impl From<UserDirectoryError> for Error {
    fn from(value: UserDirectoryError) -> Self {
        let message = value.to_string();
        match value {
            UserDirectoryError::NotFound { id } => {
                Error::not_found(message).with_details(json!({ "id": id.get() }))
            }
            UserDirectoryError::Conflict { id } => {
                Error::conflict(message).with_details(json!({ "id": id.get() }))
            }
            UserDirectoryError::IdsExhausted => Error::internal(message),
        }
    }
}

/// Domain use-case port over the user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Every stored record in creation order.
    async fn list(&self) -> Vec<User>;

    /// The record with `id`.
    async fn get(&self, id: UserId) -> Result<User, UserDirectoryError>;

    /// Store a new record built from `draft`.
    ///
    /// A requested id that is already taken fails with
    /// [`UserDirectoryError::Conflict`] and leaves the directory untouched.
    /// Without a requested id the adapter assigns the next free one.
    async fn create(&self, draft: UserDraft) -> Result<User, UserDirectoryError>;

    /// Overwrite name, email and age of the record with `id`.
    ///
    /// Any id requested by `patch` is ignored; the stored id never changes.
    async fn update(&self, id: UserId, patch: UserDraft) -> Result<User, UserDirectoryError>;

    /// Remove the record with `id`, returning it.
    async fn delete(&self, id: UserId) -> Result<User, UserDirectoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(UserDirectoryError::not_found(UserId::new(3)), ErrorCode::NotFound, "user 3 not found")]
    #[case(UserDirectoryError::conflict(UserId::new(1)), ErrorCode::Conflict, "user 1 already exists")]
    fn lookup_failures_map_to_domain_codes(
        #[case] failure: UserDirectoryError,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let error = Error::from(failure);
        assert_eq!(error.code(), code);
        assert_eq!(error.message(), message);
        assert!(error.details().is_some());
    }

    #[rstest]
    fn exhausted_ids_map_to_internal_error() {
        let error = Error::from(UserDirectoryError::IdsExhausted);
        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
