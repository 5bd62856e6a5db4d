use super::ArticleFolderCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        queries::article_folders::{CanDeleteFolderQuery, ValidateFolderExistsQuery},
    },
    domain::{errors::DomainError, folder::FolderId},
};

pub struct DeleteFolderCommand {
    pub folder_id: i64,
}

impl ArticleFolderCommandService {
    /// Delete a folder that no article is filed in.
    ///
    /// Fails with [`DomainError::FolderHasArticles`] while articles still
    /// reference the folder; the folder domain is not called in that case.
    pub async fn delete_folder(&self, command: DeleteFolderCommand) -> ApplicationResult<()> {
        let folder_id = FolderId::new(command.folder_id).map_err(ApplicationError::from_input)?;

        let report = self
            .queries
            .can_delete_folder(CanDeleteFolderQuery {
                folder_id: command.folder_id,
            })
            .await?;
        if !report.deletable {
            return Err(DomainError::FolderHasArticles {
                folder_id,
                article_count: report.article_count,
            }
            .into());
        }

        self.queries
            .validate_folder_exists(ValidateFolderExistsQuery {
                folder_id: command.folder_id,
            })
            .await?;
        self.folders.delete(folder_id).await?;
        tracing::info!(%folder_id, "folder deleted");
        Ok(())
    }
}
