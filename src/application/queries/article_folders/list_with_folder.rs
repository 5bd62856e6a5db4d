use std::collections::HashSet;

use super::ArticleFolderQueryService;
use crate::{
    application::{
        dto::{ArticleWithFolder, PageResultWithFolder},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleFilter},
        folder::FolderId,
        pagination::PageResult,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesWithFolderQuery {
    pub page: u32,
    pub size: u32,
    pub owner_id: Option<i64>,
    pub owner_type: String,
    pub article_type: String,
    pub title: String,
    pub folder_id: Option<i64>,
}

/// Which folders a listing is restricted to, decided once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FolderScope {
    Unscoped,
    /// Articles filed directly in one folder.
    Single(FolderId),
    /// Articles filed anywhere in a subtree (root included).
    Subtree(Vec<FolderId>),
}

impl ArticleFolderQueryService {
    /// List articles with their folder context.
    ///
    /// When a folder is given the listing covers its whole subtree; if the
    /// subtree cannot be resolved it narrows to that single folder instead
    /// of failing. Paging is left entirely to the article provider.
    pub async fn list_articles_with_folder(
        &self,
        query: ListArticlesWithFolderQuery,
    ) -> ApplicationResult<PageResultWithFolder> {
        let folder_id = query
            .folder_id
            .map(FolderId::new)
            .transpose()
            .map_err(ApplicationError::from_input)?;

        let filter = ArticleFilter::new(query.page, query.size)
            .with_owner(query.owner_id, query.owner_type)
            .with_article_type(query.article_type)
            .with_title(query.title);

        let page = match self.folder_scope(folder_id).await {
            FolderScope::Unscoped => self.articles.list(&filter, None).await?,
            FolderScope::Single(folder_id) => self.articles.list(&filter, Some(folder_id)).await?,
            FolderScope::Subtree(folder_ids) => {
                self.articles
                    .list_by_folder_ids(&filter, &folder_ids)
                    .await?
            }
        };

        Ok(self.enrich_page(page).await.into())
    }

    async fn folder_scope(&self, folder_id: Option<FolderId>) -> FolderScope {
        let Some(folder_id) = folder_id else {
            return FolderScope::Unscoped;
        };

        match self.folders.descendant_ids(folder_id).await {
            Ok(folder_ids) => FolderScope::Subtree(folder_ids),
            Err(err) => {
                tracing::debug!(%folder_id, error = %err, "descendant lookup failed; listing single folder");
                FolderScope::Single(folder_id)
            }
        }
    }

    async fn enrich_page(&self, mut page: PageResult<Article>) -> PageResult<ArticleWithFolder> {
        let folder_ids: HashSet<FolderId> = page
            .records
            .iter()
            .filter_map(|article| article.folder_id)
            .collect();
        let infos = self.batch_folder_info(folder_ids).await;

        let records = std::mem::take(&mut page.records)
            .into_iter()
            .map(|article| {
                let folder = article
                    .folder_id
                    .and_then(|folder_id| infos.get(&folder_id).cloned());
                ArticleWithFolder::new(article, folder)
            })
            .collect();

        page.with_records(records)
    }
}
