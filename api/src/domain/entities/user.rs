//! User domain entity

/// Store-assigned identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Absent until the user has been stored
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}
