use serde::{Deserialize, Serialize};

use crate::{model::User, types::Uuid};

/// Form body of the new user route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub username: Option<String>,
}

impl NewUserRequest {
    /// A missing username registers as the empty string
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }
}

/// `{_id, username}` as returned by the user routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

pub type UsersResponse = Vec<UserSummary>;
