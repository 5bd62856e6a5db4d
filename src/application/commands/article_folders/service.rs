use std::sync::Arc;

use crate::{
    application::queries::article_folders::ArticleFolderQueryService,
    domain::{article::ArticleProvider, folder::FolderProvider},
};

/// Write side of the article/folder composition. Guards cross-domain
/// invariants before delegating mutations to the owning domain.
pub struct ArticleFolderCommandService {
    pub(super) articles: Arc<dyn ArticleProvider>,
    pub(super) folders: Arc<dyn FolderProvider>,
    pub(super) queries: Arc<ArticleFolderQueryService>,
}

impl ArticleFolderCommandService {
    pub fn new(
        articles: Arc<dyn ArticleProvider>,
        folders: Arc<dyn FolderProvider>,
        queries: Arc<ArticleFolderQueryService>,
    ) -> Self {
        Self {
            articles,
            folders,
            queries,
        }
    }
}
