use crate::domain::folder::Folder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FolderDto {
    pub id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub name: String,
    pub path: String,
}

impl From<Folder> for FolderDto {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id.into(),
            parent_id: folder.parent_id.map(Into::into),
            name: folder.name,
            path: folder.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbItem {
    pub id: i64,
    pub name: String,
}

impl From<Folder> for BreadcrumbItem {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id.into(),
            name: folder.name,
        }
    }
}

/// Folder context attached to an article. Rebuilt on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FolderInfo {
    pub id: i64,
    pub name: String,
    pub path: String,
    /// Root first; the last item is this folder unless the ancestor chain
    /// could not be loaded, in which case it is empty.
    pub breadcrumb: Vec<BreadcrumbItem>,
}

impl FolderInfo {
    pub fn new(folder: Folder, breadcrumb: Vec<BreadcrumbItem>) -> Self {
        Self {
            id: folder.id.into(),
            name: folder.name,
            path: folder.path,
            breadcrumb,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FolderDeletability {
    pub deletable: bool,
    pub article_count: u64,
}

impl FolderDeletability {
    pub const fn from_count(article_count: u64) -> Self {
        Self {
            deletable: article_count == 0,
            article_count,
        }
    }
}
