use crate::application::dto::folders::FolderInfo;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    #[serde(default)]
    pub folder_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub owner_id: Option<i64>,
    pub owner_type: String,
    pub article_type: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            folder_id: article.folder_id.map(Into::into),
            title: article.title.into_inner(),
            owner_id: article.owner_id,
            owner_type: article.owner_type,
            article_type: article.article_type,
            content: article.content,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Article plus the folder context it is filed under. `folder` is present
/// only when the article is filed and its folder resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleWithFolder {
    #[serde(flatten)]
    pub article: ArticleDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<FolderInfo>,
}

impl ArticleWithFolder {
    pub fn new(article: impl Into<ArticleDto>, folder: Option<FolderInfo>) -> Self {
        Self {
            article: article.into(),
            folder,
        }
    }
}
