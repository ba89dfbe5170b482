use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Article;

/// A comment as the backend serializes it. The flat admin listing embeds
/// the owning article; the article-scoped listing leaves it null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub created_date: NaiveDateTime,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub article: Option<Article>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

impl CommentRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
