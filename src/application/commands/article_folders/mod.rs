mod delete_folder;
mod move_to_folder;
mod service;

pub use delete_folder::DeleteFolderCommand;
pub use move_to_folder::MoveArticleToFolderCommand;
pub use service::ArticleFolderCommandService;
