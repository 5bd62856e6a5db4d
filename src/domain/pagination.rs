// src/domain/pagination.rs

/// Page envelope returned by list operations of the article domain.
/// Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
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

impl<T> PageResult<T> {
    pub fn new(records: Vec<T>, total: u64, current: u32, size: u32) -> Self {
        let pages = if total == 0 || size == 0 {
            0
        } else {
            u32::try_from((total - 1) / u64::from(size) + 1).unwrap_or(u32::MAX)
        };
        Self {
            records,
            total,
            size,
            current,
            pages,
            has_previous: current > 1,
            has_next: current < pages,
            is_first: current <= 1,
            is_last: current >= pages,
        }
    }

    /// Swap the records while keeping every envelope field as-is.
    pub fn with_records<U>(self, records: Vec<U>) -> PageResult<U> {
        PageResult {
            records,
            total: self.total,
            size: self.size,
            current: self.current,
            pages: self.pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
            is_first: self.is_first,
            is_last: self.is_last,
        }
    }
}
