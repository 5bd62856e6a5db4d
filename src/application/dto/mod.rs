pub mod articles;
pub mod folders;
pub mod pagination;
pub mod serde_time;

pub use articles::{ArticleDto, ArticleWithFolder};
pub use folders::{BreadcrumbItem, FolderDeletability, FolderDto, FolderInfo};
pub use pagination::{Page, PageResultWithFolder};
