use crate::application::dto::articles::ArticleWithFolder;
use crate::domain::pagination::PageResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page envelope exposed to clients. Field values are copied from the
/// article domain's page without recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub size: u32,
    pub current: u32,
    pub pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub is_first: bool,
    pub is_last: bool,
}

pub type PageResultWithFolder = Page<ArticleWithFolder>;

impl<T> From<PageResult<T>> for Page<T> {
    fn from(page: PageResult<T>) -> Self {
        Self {
            records: page.records,
            total: page.total,
            size: page.size,
            current: page.current,
            pages: page.pages,
            has_previous: page.has_previous,
            has_next: page.has_next,
            is_first: page.is_first,
            is_last: page.is_last,
        }
    }
}
