// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::folder::FolderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article as owned by the article domain. Only `id` and `folder_id` carry
/// meaning for folder composition; the remaining fields are passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    pub title: ArticleTitle,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub owner_type: String,
    #[serde(default)]
    pub article_type: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn move_to(&mut self, folder_id: Option<FolderId>, now: DateTime<Utc>) {
        self.folder_id = folder_id;
        self.updated_at = now;
    }
}

/// Filters shared by the single-folder and multi-folder list variants.
/// Empty strings behave as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub page: u32,
    pub size: u32,
    pub owner_id: Option<i64>,
    pub owner_type: String,
    pub article_type: String,
    pub title: String,
}

impl ArticleFilter {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub fn with_owner(mut self, owner_id: Option<i64>, owner_type: impl Into<String>) -> Self {
        self.owner_id = owner_id;
        self.owner_type = owner_type.into();
        self
    }

    pub fn with_article_type(mut self, article_type: impl Into<String>) -> Self {
        self.article_type = article_type.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Whether `article` passes every non-folder filter.
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(owner_id) = self.owner_id {
            if article.owner_id != Some(owner_id) {
                return false;
            }
        }
        if !self.owner_type.is_empty() && article.owner_type != self.owner_type {
            return false;
        }
        if !self.article_type.is_empty() && article.article_type != self.article_type {
            return false;
        }
        let title = self.title.trim();
        title.is_empty() || article.title.contains_ignore_case(title)
    }
}
