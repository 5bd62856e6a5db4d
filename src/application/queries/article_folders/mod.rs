mod folder_info;
mod folders;
mod get_with_folder;
mod list_with_folder;
mod service;

pub use folders::{CanDeleteFolderQuery, ValidateFolderExistsQuery};
pub use get_with_folder::GetArticleWithFolderQuery;
pub use list_with_folder::ListArticlesWithFolderQuery;
pub use service::ArticleFolderQueryService;
