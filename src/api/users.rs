use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use std::sync::Arc;
use uuid::Uuid;

use super::{decode, ensure_success};
use crate::auth::rbac::Role;
use crate::auth::AuthClient;
use crate::error::ClientResult;
use crate::models::{User, UserUpdate};

/// Typed client for the user management endpoints. The whole surface is
/// admin-facing and authenticated.
pub struct UsersClient {
    auth: Arc<AuthClient>,
}

impl UsersClient {
    pub fn new(auth: Arc<AuthClient>) -> Self {
        Self { auth }
    }

    pub async fn list(&self) -> ClientResult<Vec<User>> {
        tracing::debug!("listing users");

        let response = self
            .auth
            .request_with_auth(Method::GET, "/api/users")?
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get(&self, id: Uuid) -> ClientResult<User> {
        let response = self
            .auth
            .request_with_auth(Method::GET, &format!("/api/users/{}", id))?
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update(&self, id: Uuid, request: &UserUpdate) -> ClientResult<User> {
        tracing::debug!(user_id = %id, "updating user");

        let response = self
            .auth
            .request_with_auth(Method::PUT, &format!("/api/users/{}", id))?
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        tracing::debug!(user_id = %id, "deleting user");

        let response = self
            .auth
            .request_with_auth(Method::DELETE, &format!("/api/users/{}", id))?
            .send()
            .await?;
        ensure_success(response).await
    }

    /// Changes a user's role. The backend takes the bare wire string as a
    /// plain-text body here, not a JSON document, so the default content
    /// type has to be swapped out. Returns `None` when the backend does
    /// not know the user id.
    pub async fn update_role(&self, id: Uuid, role: Role) -> ClientResult<Option<User>> {
        tracing::debug!(user_id = %id, role = role.as_str(), "updating user role");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let response = self
            .auth
            .request_with_auth(Method::PUT, &format!("/api/users/{}/role", id))?
            .headers(headers)
            .body(role.as_str())
            .send()
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::{SessionKey, SessionStore};
    use crate::error::{AuthError, ClientError};
    use serde_json::json;
    use std::time::Duration;
    use tempfile::TempDir;
    use wiremock::matchers::{body_json, body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> (TempDir, UsersClient) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        store.set(SessionKey::Token, "abc").unwrap();
        let auth =
            Arc::new(AuthClient::new(server.uri(), store, Duration::from_secs(5)).unwrap());
        (dir, UsersClient::new(auth))
    }

    fn user_body(id: Uuid, username: &str, role: &str) -> serde_json::Value {
        json!({
            "id": id,
            "username": username,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "createdDate": "2024-01-15T09:30:00",
            "role": role
        })
    }

    #[tokio::test]
    async fn test_listing_requires_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let auth =
            Arc::new(AuthClient::new(server.uri(), store, Duration::from_secs(5)).unwrap());
        let users = UsersClient::new(auth);

        let err = users.list().await.unwrap_err();
        assert!(matches!(err, ClientError::Auth(AuthError::NoToken)));
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([user_body(id, "ada", "ROLE_ADMIN")])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/users/{}", id)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(user_body(id, "ada", "ROLE_ADMIN")),
            )
            .mount(&server)
            .await;

        let (_dir, users) = client_for(&server);

        let list = users.list().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].username, "ada");

        let user = users.get(id).await.unwrap();
        assert_eq!(user.role.as_deref(), Some("ROLE_ADMIN"));
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_update_sends_full_payload() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();
        Mock::given(method("PUT"))
            .and(path(format!("/api/users/{}", id)))
            .and(body_json(json!({
                "username": "ada",
                "firstName": "Ada",
                "lastName": "King",
                "email": "ada@example.com",
                "password": "hunter2",
                "role": "ROLE_AUTHOR"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(user_body(id, "ada", "ROLE_AUTHOR")),
            )
            .mount(&server)
            .await;

        let (_dir, users) = client_for(&server);
        let update = UserUpdate {
            username: "ada".into(),
            first_name: "Ada".into(),
            last_name: "King".into(),
            email: "ada@example.com".into(),
            password: "hunter2".into(),
            role: "ROLE_AUTHOR".into(),
        };
        let user = users.update(id, &update).await.unwrap();
        assert_eq!(user.role.as_deref(), Some("ROLE_AUTHOR"));
    }

    #[tokio::test]
    async fn test_update_role_sends_plain_text_body() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();
        Mock::given(method("PUT"))
            .and(path(format!("/api/users/{}/role", id)))
            .and(header("Authorization", "Bearer abc"))
            .and(header("Content-Type", "text/plain"))
            .and(body_string("ROLE_AUTHOR"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(user_body(id, "ada", "ROLE_AUTHOR")),
            )
            .mount(&server)
            .await;

        let (_dir, users) = client_for(&server);
        let updated = users.update_role(id, Role::Author).await.unwrap();
        assert_eq!(updated.unwrap().role.as_deref(), Some("ROLE_AUTHOR"));
    }

    #[tokio::test]
    async fn test_update_role_unknown_user_is_none() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();
        Mock::given(method("PUT"))
            .and(path(format!("/api/users/{}/role", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .mount(&server)
            .await;

        let (_dir, users) = client_for(&server);
        let updated = users.update_role(id, Role::User).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();
        Mock::given(method("DELETE"))
            .and(path(format!("/api/users/{}", id)))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let (_dir, users) = client_for(&server);
        users.delete(id).await.unwrap();
    }
}
