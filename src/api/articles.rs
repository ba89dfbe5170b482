use reqwest::Method;
use std::sync::Arc;
use uuid::Uuid;

use super::{decode, ensure_success};
use crate::auth::AuthClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{Article, ArticleRequest};

/// Typed client for the article endpoints. Reads are public; mutations
/// carry the bearer token and fail locally when logged out.
pub struct ArticlesClient {
    auth: Arc<AuthClient>,
}

impl ArticlesClient {
    pub fn new(auth: Arc<AuthClient>) -> Self {
        Self { auth }
    }

    // The backend rejects empty fields with a 400; checking here saves
    // the round trip and gives a typed error.
    fn validate(request: &ArticleRequest) -> ClientResult<()> {
        if request.title.is_empty() {
            return Err(ClientError::validation("Article title cannot be empty"));
        }
        if request.content.is_empty() {
            return Err(ClientError::validation("Article content cannot be empty"));
        }
        Ok(())
    }

    pub async fn list(&self) -> ClientResult<Vec<Article>> {
        tracing::debug!("listing articles");

        let response = self
            .auth
            .request_public(Method::GET, "/api/articles")
            .send()
            .await?;
        decode(response).await
    }

    pub async fn list_by_author(&self, author_id: Uuid) -> ClientResult<Vec<Article>> {
        tracing::debug!(author_id = %author_id, "listing articles by author");

        let response = self
            .auth
            .request_public(Method::GET, &format!("/api/articles?authorId={}", author_id))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get(&self, id: Uuid) -> ClientResult<Article> {
        let response = self
            .auth
            .request_public(Method::GET, &format!("/api/articles/{}", id))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create(&self, request: &ArticleRequest) -> ClientResult<Article> {
        Self::validate(request)?;
        tracing::debug!(title = %request.title, "creating article");

        let response = self
            .auth
            .request_with_auth(Method::POST, "/api/articles")?
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update(&self, id: Uuid, request: &ArticleRequest) -> ClientResult<Article> {
        Self::validate(request)?;
        tracing::debug!(article_id = %id, "updating article");

        let response = self
            .auth
            .request_with_auth(Method::PUT, &format!("/api/articles/{}", id))?
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        tracing::debug!(article_id = %id, "deleting article");

        let response = self
            .auth
            .request_with_auth(Method::DELETE, &format!("/api/articles/{}", id))?
            .send()
            .await?;
        ensure_success(response).await
    }
}
