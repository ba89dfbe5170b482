use reqwest::Method;
use std::sync::Arc;
use uuid::Uuid;

use super::{decode, ensure_success};
use crate::auth::AuthClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{Comment, CommentRequest};

/// Typed client for the comment endpoints. Comments live under their
/// article for reading and posting; the flat `/api/comments` surface is
/// the admin view and requires auth throughout.
pub struct CommentsClient {
    auth: Arc<AuthClient>,
}

impl CommentsClient {
    pub fn new(auth: Arc<AuthClient>) -> Self {
        Self { auth }
    }

    fn validate(request: &CommentRequest) -> ClientResult<()> {
        if request.text.is_empty() {
            return Err(ClientError::validation("Comment text cannot be empty"));
        }
        Ok(())
    }

    pub async fn list_for_article(&self, article_id: Uuid) -> ClientResult<Vec<Comment>> {
        tracing::debug!(article_id = %article_id, "listing comments");

        let response = self
            .auth
            .request_public(
                Method::GET,
                &format!("/api/articles/{}/comments", article_id),
            )
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create(
        &self,
        article_id: Uuid,
        request: &CommentRequest,
    ) -> ClientResult<Comment> {
        Self::validate(request)?;
        tracing::debug!(article_id = %article_id, "creating comment");

        let response = self
            .auth
            .request_with_auth(
                Method::POST,
                &format!("/api/articles/{}/comments", article_id),
            )?
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_for_article(
        &self,
        article_id: Uuid,
        comment_id: Uuid,
    ) -> ClientResult<()> {
        tracing::debug!(article_id = %article_id, comment_id = %comment_id, "deleting comment");

        let response = self
            .auth
            .request_with_auth(
                Method::DELETE,
                &format!("/api/articles/{}/comments/{}", article_id, comment_id),
            )?
            .send()
            .await?;
        ensure_success(response).await
    }

    /// Every comment on the site, each with its owning article embedded.
    pub async fn list_all(&self) -> ClientResult<Vec<Comment>> {
        tracing::debug!("listing all comments");

        let response = self
            .auth
            .request_with_auth(Method::GET, "/api/comments")?
            .send()
            .await?;
        decode(response).await
    }

    pub async fn get(&self, id: Uuid) -> ClientResult<Comment> {
        let response = self
            .auth
            .request_with_auth(Method::GET, &format!("/api/comments/{}", id))?
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update(&self, id: Uuid, request: &CommentRequest) -> ClientResult<Comment> {
        Self::validate(request)?;
        tracing::debug!(comment_id = %id, "updating comment");

        let response = self
            .auth
            .request_with_auth(Method::PUT, &format!("/api/comments/{}", id))?
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        tracing::debug!(comment_id = %id, "deleting comment");

        let response = self
            .auth
            .request_with_auth(Method::DELETE, &format!("/api/comments/{}", id))?
            .send()
            .await?;
        ensure_success(response).await
    }
}
