use std::collections::{HashMap, HashSet};

use futures::future::join_all;

use super::ArticleFolderQueryService;
use crate::{
    application::dto::{BreadcrumbItem, FolderInfo},
    domain::{
        errors::{DomainError, DomainResult},
        folder::FolderId,
    },
};

impl ArticleFolderQueryService {
    /// Resolve name, path and breadcrumb for one folder.
    ///
    /// Fails only when the folder itself cannot be fetched. A failing
    /// ancestor lookup still yields the folder, with an empty breadcrumb.
    pub(super) async fn folder_info(&self, folder_id: FolderId) -> DomainResult<FolderInfo> {
        let folder = self
            .folders
            .find_by_id(folder_id)
            .await?
            .ok_or(DomainError::FolderNotFound(folder_id))?;

        let breadcrumb = match self.folders.ancestors(folder_id).await {
            Ok(ancestors) => ancestors.into_iter().map(BreadcrumbItem::from).collect(),
            Err(err) => {
                tracing::debug!(%folder_id, error = %err, "ancestor lookup failed; empty breadcrumb");
                Vec::new()
            }
        };

        Ok(FolderInfo::new(folder, breadcrumb))
    }

    /// Best-effort variant of [`Self::folder_info`]: failures become `None`.
    pub(super) async fn try_folder_info(&self, folder_id: FolderId) -> Option<FolderInfo> {
        match self.folder_info(folder_id).await {
            Ok(info) => Some(info),
            Err(err) => {
                tracing::debug!(%folder_id, error = %err, "folder enrichment skipped");
                None
            }
        }
    }

    /// Resolve every distinct folder id once. Lookups run concurrently and
    /// fail independently; ids that did not resolve are simply missing from
    /// the returned map.
    pub(super) async fn batch_folder_info(
        &self,
        folder_ids: HashSet<FolderId>,
    ) -> HashMap<FolderId, FolderInfo> {
        let lookups = folder_ids.into_iter().map(|folder_id| async move {
            self.try_folder_info(folder_id)
                .await
                .map(|info| (folder_id, info))
        });

        join_all(lookups).await.into_iter().flatten().collect()
    }
}
