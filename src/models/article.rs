use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An article as the backend serializes it. Datetimes come over the wire
/// as ISO-8601 without timezone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_date: NaiveDateTime,
    #[serde(default)]
    pub updated_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRequest {
    pub title: String,
    pub content: String,
}

impl ArticleRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
