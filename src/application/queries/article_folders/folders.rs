use super::ArticleFolderQueryService;
use crate::{
    application::{
        dto::{FolderDeletability, FolderDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, folder::FolderId},
};

pub struct ValidateFolderExistsQuery {
    pub folder_id: i64,
}

pub struct CanDeleteFolderQuery {
    pub folder_id: i64,
}

impl ArticleFolderQueryService {
    pub async fn validate_folder_exists(
        &self,
        query: ValidateFolderExistsQuery,
    ) -> ApplicationResult<FolderDto> {
        let folder_id = FolderId::new(query.folder_id).map_err(ApplicationError::from_input)?;
        let folder = self
            .folders
            .find_by_id(folder_id)
            .await?
            .ok_or(DomainError::FolderNotFound(folder_id))?;
        Ok(folder.into())
    }

    /// Report whether a folder can be deleted: only when no article is filed
    /// in it. Nothing is deleted here.
    pub async fn can_delete_folder(
        &self,
        query: CanDeleteFolderQuery,
    ) -> ApplicationResult<FolderDeletability> {
        let folder_id = FolderId::new(query.folder_id).map_err(ApplicationError::from_input)?;
        let count = self.articles.count_by_folder(folder_id).await?;
        Ok(FolderDeletability::from_count(count))
    }
}
