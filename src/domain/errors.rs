// src/domain/errors.rs
use crate::domain::{article::ArticleId, folder::FolderId};
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("article {0} not found")]
    ArticleNotFound(ArticleId),
    #[error("folder {0} not found")]
    FolderNotFound(FolderId),
    #[error("folder {folder_id} still holds {article_count} article(s) and cannot be deleted")]
    FolderHasArticles {
        folder_id: FolderId,
        article_count: u64,
    },
    #[error("provider failure: {0}")]
    Provider(String),
}

impl DomainError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound(_) | Self::FolderNotFound(_))
    }
}
