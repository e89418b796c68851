//! User record model.
//!
//! [`User`] is the stored record; [`UserDraft`] is the input used to create or
//! update one. Keeping them apart means a client-supplied id can only reach
//! the directory through [`UserDraft::requested_id`], where the directory
//! checks it for uniqueness.
//!
//! Field values are stored exactly as received.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Integer user identifier, unique within a directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw integer identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The identifier following this one, or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` never changes once the record is stored; updates go through
///   [`User::apply`], which keeps it.
///
/// # Examples
/// ```
/// use user_directory::domain::{User, UserDraft, UserId};
///
/// let draft = UserDraft::new(None, "Alice", "alice@example.com", 25);
/// let user = User::from_draft(UserId::new(1), draft);
/// assert_eq!(user.id(), UserId::new(1));
/// assert_eq!(user.name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    id: UserId,
    #[schema(example = "Alice")]
    name: String,
    #[schema(example = "alice@example.com")]
    email: String,
    #[schema(example = 25)]
    age: i64,
}

impl User {
    /// Build a record from raw parts.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Build a stored record from a draft, ignoring any id the draft
    /// requested.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            name, email, age, ..
        } = draft;
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Replace the mutable fields with those from `draft`, keeping `id`.
    pub fn apply(&mut self, draft: UserDraft) {
        let UserDraft {
            name, email, age, ..
        } = draft;
        self.name = name;
        self.email = email;
        self.age = age;
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in years.
    pub fn age(&self) -> i64 {
        self.age
    }
}

/// Input for creating or updating a [`User`].
///
/// `requested_id` is only honoured on create, and only after the directory
/// confirms no stored record already uses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    requested_id: Option<UserId>,
    name: String,
    email: String,
    age: i64,
}

impl UserDraft {
    /// Collect the supplied fields.
    pub fn new(
        requested_id: Option<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            requested_id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Identifier the caller asked for, if any.
    pub fn requested_id(&self) -> Option<UserId> {
        self.requested_id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in years.
    pub fn age(&self) -> i64 {
        self.age
    }
}
