use std::sync::Arc;
use std::time::Duration;

use crate::{
    api::{ArticlesClient, CommentsClient, UsersClient},
    auth::{AuthClient, SessionStore},
    config::Settings,
    error::ClientResult,
};

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

/// Shared client state wiring the auth layer and the typed endpoint
/// clients from one `Settings`.
#[derive(Clone)]
pub struct BlogClient {
    pub settings: Arc<Settings>,
    pub auth: Arc<AuthClient>,
    pub articles: Arc<ArticlesClient>,
    pub comments: Arc<CommentsClient>,
    pub users: Arc<UsersClient>,
}

impl BlogClient {
    /// Create a new client with the session directory named in the settings
    pub fn new(settings: Settings) -> ClientResult<Self> {
        let store = SessionStore::new(settings.session_dir.clone());
        Self::new_with_store(settings, store)
    }

    /// Create a new client over an existing session store
    pub fn new_with_store(settings: Settings, store: SessionStore) -> ClientResult<Self> {
        let settings = Arc::new(settings);
        let timeout = Duration::from_secs(settings.http_timeout_secs);

        let auth = Arc::new(AuthClient::new(settings.base_url(), store, timeout)?);

        let articles = Arc::new(ArticlesClient::new(auth.clone()));
        let comments = Arc::new(CommentsClient::new(auth.clone()));
        let users = Arc::new(UsersClient::new(auth.clone()));

        Ok(Self {
            settings,
            auth,
            articles,
            comments,
            users,
        })
    }
}
