//! User entity.

/// A registered user.
///
/// `id` is assigned by the store when the row is inserted and never changes
/// afterwards. `user_name` is unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let user = User::new(1, "alice".to_string(), "a@x.com".to_string());
    /// ```
    pub fn new(id: i64, user_name: String, email: String) -> Self {
        Self {
            id,
            user_name,
            email,
        }
    }
}

/// Input data for creating a new user.
///
/// Carries no `id`: identifiers are only ever generated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
}

impl NewUser {
    /// Returns `true` when both required fields are non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.user_name.is_empty() && !self.email.is_empty()
    }

    /// Attaches a store-assigned identifier.
    pub fn with_id(self, id: i64) -> User {
        User::new(id, self.user_name, self.email)
    }
}
