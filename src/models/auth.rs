use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signup request body. All fields are required by the backend; it
/// rejects empty or missing ones with a 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Body returned by login and signup. Fields default to empty so a 2xx
/// response without a token is reported as an auth failure, not a parse
/// error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub username: String,
}

/// Body of the permission introspection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub username: String,
    pub role: String,
    pub is_admin: bool,
    pub is_author: bool,
    pub can_create_articles: bool,
    pub can_edit_all_articles: bool,
    pub can_delete_all_articles: bool,
    pub can_manage_users: bool,
}

/// Body of the user-info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub role: String,
}
