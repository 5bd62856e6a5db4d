use super::ArticleFolderCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        queries::article_folders::ValidateFolderExistsQuery,
    },
    domain::{article::ArticleId, folder::FolderId},
};

pub struct MoveArticleToFolderCommand {
    pub article_id: i64,
    /// `None` un-files the article.
    pub folder_id: Option<i64>,
}

impl ArticleFolderCommandService {
    /// Move an article into a folder, or out of any folder.
    ///
    /// The target folder must exist before the article domain is asked to
    /// move anything, so an article never points at a missing folder.
    pub async fn move_article_to_folder(
        &self,
        command: MoveArticleToFolderCommand,
    ) -> ApplicationResult<()> {
        let article_id = ArticleId::new(command.article_id).map_err(ApplicationError::from_input)?;
        let folder_id = command
            .folder_id
            .map(FolderId::new)
            .transpose()
            .map_err(ApplicationError::from_input)?;

        if let Some(folder_id) = folder_id {
            self.queries
                .validate_folder_exists(ValidateFolderExistsQuery {
                    folder_id: folder_id.into(),
                })
                .await?;
        }

        self.articles.move_to_folder(article_id, folder_id).await?;
        tracing::info!(%article_id, folder_id = ?folder_id.map(i64::from), "article moved");
        Ok(())
    }
}
