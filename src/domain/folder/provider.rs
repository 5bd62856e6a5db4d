use crate::domain::errors::DomainResult;
use crate::domain::folder::entity::Folder;
use crate::domain::folder::value_objects::FolderId;
use async_trait::async_trait;

/// Capabilities consumed from the folder domain. How the hierarchy is stored
/// and traversed stays behind this trait.
#[async_trait]
pub trait FolderProvider: Send + Sync {
    async fn find_by_id(&self, id: FolderId) -> DomainResult<Option<Folder>>;

    /// Ids of `id` and of every folder nested beneath it at any depth.
    /// The queried id is part of the result.
    async fn descendant_ids(&self, id: FolderId) -> DomainResult<Vec<FolderId>>;

    /// Chain from the hierarchy root down to `id`, inclusive of `id` itself.
    async fn ancestors(&self, id: FolderId) -> DomainResult<Vec<Folder>>;

    async fn delete(&self, id: FolderId) -> DomainResult<()>;
}
