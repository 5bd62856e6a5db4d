use crate::domain::article::entity::{Article, ArticleFilter};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::folder::FolderId;
use crate::domain::pagination::PageResult;
use async_trait::async_trait;

/// Capabilities consumed from the article domain. Filtering, ordering and
/// pagination arithmetic all happen behind this trait.
#[async_trait]
pub trait ArticleProvider: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Filtered page, optionally restricted to articles filed directly in
    /// `folder_id`.
    async fn list(
        &self,
        filter: &ArticleFilter,
        folder_id: Option<FolderId>,
    ) -> DomainResult<PageResult<Article>>;

    /// Filtered page restricted to articles filed in any of `folder_ids`.
    async fn list_by_folder_ids(
        &self,
        filter: &ArticleFilter,
        folder_ids: &[FolderId],
    ) -> DomainResult<PageResult<Article>>;

    async fn move_to_folder(&self, id: ArticleId, folder_id: Option<FolderId>)
    -> DomainResult<()>;

    async fn count_by_folder(&self, folder_id: FolderId) -> DomainResult<u64>;
}
