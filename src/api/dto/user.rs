//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

/// Request body for creating or replacing a user.
///
/// Missing fields deserialize as empty strings and are rejected by
/// validation. Any `id` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
}

/// User as returned by the API.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub user_name: String,
    pub email: String,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            user_name: u.user_name,
            email: u.email,
        }
    }
}
