use super::ArticleFolderQueryService;
use crate::{
    application::{
        dto::ArticleWithFolder,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, errors::DomainError},
};

pub struct GetArticleWithFolderQuery {
    pub id: i64,
}

impl ArticleFolderQueryService {
    /// Fetch an article and attach its folder context when available.
    ///
    /// A missing article is an error; a folder that cannot be resolved only
    /// leaves `folder` empty.
    pub async fn get_article_with_folder(
        &self,
        query: GetArticleWithFolderQuery,
    ) -> ApplicationResult<ArticleWithFolder> {
        let id = ArticleId::new(query.id).map_err(ApplicationError::from_input)?;
        let article = self
            .articles
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ArticleNotFound(id))?;

        let folder = match article.folder_id {
            Some(folder_id) => self.try_folder_info(folder_id).await,
            None => None,
        };

        Ok(ArticleWithFolder::new(article, folder))
    }
}
