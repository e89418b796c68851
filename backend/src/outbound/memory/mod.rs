//! In-memory user directory adapter.
//!
//! Records live in a `Vec` behind a single [`RwLock`]. Reads share the lock;
//! every mutation holds the write guard across its check-then-modify step,
//! so two concurrent creates can never both claim the same id.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::{User, UserDraft, UserId};

/// Records every fresh directory starts with.
const SEED_USERS: [(i64, &str, &str, i64); 2] = [
    (1, "Alice", "alice@example.com", 25),
    (2, "Bob", "bob@example.com", 30),
];

/// Lock-guarded, insertion-ordered user collection.
///
/// # Examples
/// ```
/// use user_directory::domain::ports::UserDirectory;
/// use user_directory::outbound::memory::InMemoryUserDirectory;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let directory = InMemoryUserDirectory::seeded().expect("seed users are valid");
/// assert_eq!(directory.list().await.len(), 2);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<User>>,
}

/// Failures raised while building a directory from existing records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// Two seed records share an id.
    #[error("seed users contain duplicate id {0}")]
    DuplicateId(UserId),
}

impl InMemoryUserDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory holding the standard seed records (Alice and Bob).
    pub fn seeded() -> Result<Self, SeedError> {
        let users = SEED_USERS
            .into_iter()
            .map(|(id, name, email, age)| User::new(UserId::new(id), name, email, age))
            .collect();
        Self::with_users(users)
    }

    /// A directory holding `users` in the given order.
    pub fn with_users(users: Vec<User>) -> Result<Self, SeedError> {
        for (index, user) in users.iter().enumerate() {
            let earlier = users.iter().take(index);
            if earlier.map(User::id).any(|id| id == user.id()) {
                return Err(SeedError::DuplicateId(user.id()));
            }
        }
        Ok(Self {
            users: RwLock::new(users),
        })
    }
}

fn position_of(users: &[User], id: UserId) -> Option<usize> {
    users.iter().position(|user| user.id() == id)
}

fn next_free_id(users: &[User]) -> Result<UserId, UserDirectoryError> {
    match users.iter().map(User::id).max() {
        Some(highest) => highest.next().ok_or(UserDirectoryError::IdsExhausted),
        None => Ok(UserId::new(1)),
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn get(&self, id: UserId) -> Result<User, UserDirectoryError> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or(UserDirectoryError::NotFound { id })
    }

    async fn create(&self, draft: UserDraft) -> Result<User, UserDirectoryError> {
        let mut users = self.users.write().await;
        let id = match draft.requested_id() {
            Some(id) if position_of(&users, id).is_some() => {
                return Err(UserDirectoryError::Conflict { id });
            }
            Some(id) => id,
            None => next_free_id(&users)?,
        };
        let user = User::from_draft(id, draft);
        users.push(user.clone());
        debug!(user_id = %id, size = users.len(), "user stored");
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UserDraft) -> Result<User, UserDirectoryError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id() == id)
            .ok_or(UserDirectoryError::NotFound { id })?;
        user.apply(patch);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<User, UserDirectoryError> {
        let mut users = self.users.write().await;
        let index = position_of(&users, id).ok_or(UserDirectoryError::NotFound { id })?;
        let removed = users.remove(index);
        debug!(user_id = %id, size = users.len(), "user removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests;
