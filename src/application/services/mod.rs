// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::article_folders::ArticleFolderCommandService,
        queries::article_folders::ArticleFolderQueryService,
    },
    domain::{article::ArticleProvider, folder::FolderProvider},
};

/// Entry point handed to the presentation layer.
pub struct ApplicationServices {
    pub article_folder_queries: Arc<ArticleFolderQueryService>,
    pub article_folder_commands: Arc<ArticleFolderCommandService>,
}

impl ApplicationServices {
    pub fn new(
        article_provider: Arc<dyn ArticleProvider>,
        folder_provider: Arc<dyn FolderProvider>,
    ) -> Self {
        let article_folder_queries = Arc::new(ArticleFolderQueryService::new(
            Arc::clone(&article_provider),
            Arc::clone(&folder_provider),
        ));

        let article_folder_commands = Arc::new(ArticleFolderCommandService::new(
            Arc::clone(&article_provider),
            Arc::clone(&folder_provider),
            Arc::clone(&article_folder_queries),
        ));

        Self {
            article_folder_queries,
            article_folder_commands,
        }
    }
}
