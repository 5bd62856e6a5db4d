use std::sync::Arc;

use crate::domain::{article::ArticleProvider, folder::FolderProvider};

/// Read side of the article/folder composition: enriched article reads,
/// folder-scoped listings and folder checks.
pub struct ArticleFolderQueryService {
    pub(super) articles: Arc<dyn ArticleProvider>,
    pub(super) folders: Arc<dyn FolderProvider>,
}

impl ArticleFolderQueryService {
    pub fn new(articles: Arc<dyn ArticleProvider>, folders: Arc<dyn FolderProvider>) -> Self {
        Self { articles, folders }
    }
}
