use crate::application::ports::time::Clock;
use crate::domain::article::{Article, ArticleFilter, ArticleId, ArticleProvider};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::folder::FolderId;
use crate::domain::pagination::PageResult;
use crate::infrastructure::repositories::error::map_poisoned;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Page size used when a listing asks for zero records per page.
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Article store held in memory. Listings are ordered by id.
pub struct InMemoryArticleProvider {
    articles: RwLock<BTreeMap<ArticleId, Article>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryArticleProvider {
    pub fn new(articles: impl IntoIterator<Item = Article>, clock: Arc<dyn Clock>) -> Self {
        Self {
            articles: RwLock::new(
                articles
                    .into_iter()
                    .map(|article| (article.id, article))
                    .collect(),
            ),
            clock,
        }
    }

    fn page_where<F>(&self, filter: &ArticleFilter, in_scope: F) -> DomainResult<PageResult<Article>>
    where
        F: Fn(&Article) -> bool,
    {
        let articles = self.articles.read().map_err(map_poisoned("article"))?;
        let matching: Vec<&Article> = articles
            .values()
            .filter(|article| in_scope(article) && filter.matches(article))
            .collect();

        let size = if filter.size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            filter.size
        };
        let current = filter.page.max(1);
        let offset = usize::try_from(u64::from(current - 1) * u64::from(size)).unwrap_or(usize::MAX);
        let records = matching
            .iter()
            .skip(offset)
            .take(size as usize)
            .map(|article| (*article).clone())
            .collect();

        Ok(PageResult::new(records, matching.len() as u64, current, size))
    }
}

#[async_trait]
impl ArticleProvider for InMemoryArticleProvider {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.read().map_err(map_poisoned("article"))?;
        Ok(articles.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        folder_id: Option<FolderId>,
    ) -> DomainResult<PageResult<Article>> {
        self.page_where(filter, |article| {
            folder_id.is_none_or(|folder_id| article.folder_id == Some(folder_id))
        })
    }

    async fn list_by_folder_ids(
        &self,
        filter: &ArticleFilter,
        folder_ids: &[FolderId],
    ) -> DomainResult<PageResult<Article>> {
        self.page_where(filter, |article| {
            article
                .folder_id
                .is_some_and(|folder_id| folder_ids.contains(&folder_id))
        })
    }

    async fn move_to_folder(
        &self,
        id: ArticleId,
        folder_id: Option<FolderId>,
    ) -> DomainResult<()> {
        let now = self.clock.now();
        let mut articles = self.articles.write().map_err(map_poisoned("article"))?;
        let article = articles
            .get_mut(&id)
            .ok_or(DomainError::ArticleNotFound(id))?;
        article.move_to(folder_id, now);
        Ok(())
    }

    async fn count_by_folder(&self, folder_id: FolderId) -> DomainResult<u64> {
        let articles = self.articles.read().map_err(map_poisoned("article"))?;
        Ok(articles
            .values()
            .filter(|article| article.folder_id == Some(folder_id))
            .count() as u64)
    }
}
