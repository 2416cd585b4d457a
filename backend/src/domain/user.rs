//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
///
/// Identifiers are opaque strings; the service renders them from decimal
/// counters but the repository only ever compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the identifier carries no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Caller-supplied user attributes, without an identifier.
///
/// Used for both creation and full replacement; there is no partial patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Display name.
    pub name: String,
    /// Contact address, if known.
    pub email: Option<String>,
}

impl UserDraft {
    /// Build a draft from its parts.
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }
}

/// Stored user record.
///
/// Serialises as `{"id": "...", "name": "...", "email": "..."}`; `email` is
/// omitted when absent.
///
/// # Examples
/// ```
/// use users_api::domain::{User, UserId};
///
/// let user = User::new(UserId::new("1"), "Ada", None);
/// assert_eq!(user.id().as_str(), "1");
/// assert_eq!(user.name(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl User {
    /// Build a user from its parts.
    pub fn new(id: UserId, name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email,
        }
    }

    /// Attach an identifier to a draft.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self { id, name, email }
    }

    /// Replace the identifier, keeping every other attribute.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact address, if known.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
