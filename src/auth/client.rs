use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

use crate::auth::rbac;
use crate::auth::session::{Session, SessionKey, SessionStore};
use crate::error::{AuthError, ClientResult};
use crate::models::{AuthResponse, Credentials, Registration, UserInfo, UserPermissions};

/// Client for the backend's auth endpoints. Owns the session store and is
/// the only writer of session state; login and register either complete
/// fully or leave the store untouched.
pub struct AuthClient {
    client: Client,
    base_url: String,
    store: SessionStore,
}

impl AuthClient {
    pub fn new(
        base_url: impl Into<String>,
        store: SessionStore,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("blog-client/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        })
    }

    /// The session store this client writes to.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Authenticate against the backend. On success the returned
    /// token/username/role are persisted; on any failure the store is
    /// left exactly as it was.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        tracing::debug!(username, "logging in");

        let response = self
            .client
            .post(format!("{}/api/users/login", self.base_url))
            .json(&credentials)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(username, status = status.as_u16(), "login rejected");
            return Err(AuthError::LoginFailed {
                status: status.as_u16(),
            }
            .into());
        }

        let auth: AuthResponse = response.json().await?;
        if auth.token.is_empty() {
            tracing::warn!(username, "login response carried no token");
            return Err(AuthError::LoginFailed {
                status: status.as_u16(),
            }
            .into());
        }

        self.save_auth_data(&auth)?;
        tracing::info!(username = %auth.username, role = %auth.role, "login succeeded");
        Ok(auth)
    }

    /// Create an account and start a session with the returned fields.
    /// Duplicate usernames/emails are the backend's call; whatever it
    /// rejects is surfaced unchanged.
    pub async fn register(&self, registration: &Registration) -> ClientResult<AuthResponse> {
        tracing::debug!(username = %registration.username, "registering");

        let response = self
            .client
            .post(format!("{}/api/users/signup", self.base_url))
            .json(registration)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                username = %registration.username,
                status = status.as_u16(),
                "registration rejected"
            );
            return Err(AuthError::RegisterFailed {
                status: status.as_u16(),
            }
            .into());
        }

        let auth: AuthResponse = response.json().await?;
        if auth.token.is_empty() {
            return Err(AuthError::RegisterFailed {
                status: status.as_u16(),
            }
            .into());
        }

        self.save_auth_data(&auth)?;
        tracing::info!(username = %auth.username, role = %auth.role, "registration succeeded");
        Ok(auth)
    }

    /// Drop the session. Clearing an absent session is fine; this never
    /// fails.
    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("logged out");
    }

    // Write order is observable: token, then username, then role. There
    // is no multi-key atomicity.
    fn save_auth_data(&self, auth: &AuthResponse) -> ClientResult<()> {
        self.store.set(SessionKey::Token, &auth.token)?;
        self.store.set(SessionKey::Username, &auth.username)?;
        self.store.set(SessionKey::Role, &auth.role)?;
        Ok(())
    }

    /// Request builder for an authenticated call: bearer token plus a
    /// JSON content type, which callers may override. Fails before any
    /// network I/O when no token is stored.
    pub fn request_with_auth(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let token = self.store.token().ok_or(AuthError::NoToken)?;
        let url = format!("{}{}", self.base_url, path);

        Ok(self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .bearer_auth(token))
    }

    /// Request builder for endpoints the backend serves without auth.
    pub fn request_public(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Ask the backend which permissions the current token carries.
    pub async fn get_user_permissions(&self) -> ClientResult<UserPermissions> {
        let response = self
            .request_with_auth(Method::GET, "/api/auth/check-permission")?
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "permission check rejected");
            return Err(AuthError::PermissionFetchFailed {
                status: status.as_u16(),
            }
            .into());
        }

        Ok(response.json().await?)
    }

    /// Identity as the backend sees the current token.
    pub async fn get_user_info(&self) -> ClientResult<UserInfo> {
        let response = self
            .request_with_auth(Method::GET, "/api/auth/user-info")?
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::PermissionFetchFailed {
                status: status.as_u16(),
            }
            .into());
        }

        Ok(response.json().await?)
    }

    /// Local, synchronous permission check over the stored role, keyed by
    /// the wire permission names. Unknown names grant nothing.
    pub fn has_permission(&self, permission: &str) -> bool {
        rbac::has_named_permission(self.store.role().as_deref(), permission)
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Identity snapshot from local state only; no network.
    pub fn session(&self) -> Session {
        self.store.snapshot()
    }

    pub fn is_admin(&self) -> bool {
        rbac::is_admin(self.store.role().as_deref())
    }

    pub fn is_author(&self) -> bool {
        rbac::is_author(self.store.role().as_deref())
    }

    pub fn is_user(&self) -> bool {
        rbac::is_user(self.store.role().as_deref())
    }

    pub fn can_create_articles(&self) -> bool {
        rbac::can_create_articles(self.store.role().as_deref())
    }

    pub fn can_manage_users(&self) -> bool {
        rbac::can_manage_users(self.store.role().as_deref())
    }

    pub fn can_edit_all_articles(&self) -> bool {
        rbac::can_edit_all_articles(self.store.role().as_deref())
    }

    pub fn can_delete_all_articles(&self) -> bool {
        rbac::can_delete_all_articles(self.store.role().as_deref())
    }
}
