// tests/support/mocks.rs
//
// Provider stand-ins that record every call and can be told to fail for
// chosen ids.
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use folio_core::domain::article::{Article, ArticleFilter, ArticleId, ArticleProvider};
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::folder::{Folder, FolderId, FolderProvider};
use folio_core::domain::pagination::PageResult;

pub fn unavailable() -> DomainError {
    DomainError::provider("backend unavailable")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCall {
    Single(Option<FolderId>),
    Many(Vec<FolderId>),
}

#[derive(Default)]
pub struct StubArticleProvider {
    articles: Vec<Article>,
    canned_page: Option<PageResult<Article>>,
    fail_find: bool,
    fail_list: bool,
    fail_count: bool,
    count_override: Option<u64>,
    pub list_calls: Mutex<Vec<ListCall>>,
    /// `(page, size)` of every filter handed to a list call.
    pub paging_seen: Mutex<Vec<(u32, u32)>>,
    pub move_calls: Mutex<Vec<(ArticleId, Option<FolderId>)>>,
    pub count_calls: AtomicUsize,
}

impl StubArticleProvider {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }

    /// Return this exact page from every list call.
    pub fn with_canned_page(mut self, page: PageResult<Article>) -> Self {
        self.canned_page = Some(page);
        self
    }

    pub fn failing_find(mut self) -> Self {
        self.fail_find = true;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_count(mut self) -> Self {
        self.fail_count = true;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count_override = Some(count);
        self
    }

    pub fn list_calls(&self) -> Vec<ListCall> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn move_calls(&self) -> Vec<(ArticleId, Option<FolderId>)> {
        self.move_calls.lock().unwrap().clone()
    }

    pub fn paging_seen(&self) -> Vec<(u32, u32)> {
        self.paging_seen.lock().unwrap().clone()
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    fn page(
        &self,
        filter: &ArticleFilter,
        in_scope: impl Fn(&Article) -> bool,
    ) -> DomainResult<PageResult<Article>> {
        self.paging_seen
            .lock()
            .unwrap()
            .push((filter.page, filter.size));
        if self.fail_list {
            return Err(unavailable());
        }
        if let Some(page) = &self.canned_page {
            return Ok(page.clone());
        }
        let records: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| in_scope(a) && filter.matches(a))
            .cloned()
            .collect();
        let total = records.len() as u64;
        Ok(PageResult::new(records, total, filter.page, filter.size))
    }
}

#[async_trait]
impl ArticleProvider for StubArticleProvider {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        if self.fail_find {
            return Err(unavailable());
        }
        Ok(self.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        folder_id: Option<FolderId>,
    ) -> DomainResult<PageResult<Article>> {
        self.list_calls.lock().unwrap().push(ListCall::Single(folder_id));
        self.page(filter, |a| folder_id.is_none() || a.folder_id == folder_id)
    }

    async fn list_by_folder_ids(
        &self,
        filter: &ArticleFilter,
        folder_ids: &[FolderId],
    ) -> DomainResult<PageResult<Article>> {
        self.list_calls
            .lock()
            .unwrap()
            .push(ListCall::Many(folder_ids.to_vec()));
        self.page(filter, |a| {
            a.folder_id.is_some_and(|id| folder_ids.contains(&id))
        })
    }

    async fn move_to_folder(
        &self,
        id: ArticleId,
        folder_id: Option<FolderId>,
    ) -> DomainResult<()> {
        self.move_calls.lock().unwrap().push((id, folder_id));
        if self.articles.iter().any(|a| a.id == id) {
            Ok(())
        } else {
            Err(DomainError::ArticleNotFound(id))
        }
    }

    async fn count_by_folder(&self, folder_id: FolderId) -> DomainResult<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_count {
            return Err(unavailable());
        }
        if let Some(count) = self.count_override {
            return Ok(count);
        }
        Ok(self
            .articles
            .iter()
            .filter(|a| a.folder_id == Some(folder_id))
            .count() as u64)
    }
}

#[derive(Default)]
pub struct StubFolderProvider {
    folders: HashMap<FolderId, Folder>,
    fail_find: HashSet<FolderId>,
    fail_ancestors: HashSet<FolderId>,
    fail_descendants: bool,
    pub find_calls: AtomicUsize,
    pub ancestor_calls: AtomicUsize,
    pub descendant_calls: AtomicUsize,
    pub deleted: Mutex<Vec<FolderId>>,
}

impl StubFolderProvider {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self {
            folders: folders.into_iter().map(|f| (f.id, f)).collect(),
            ..Self::default()
        }
    }

    pub fn failing_find(mut self, id: FolderId) -> Self {
        self.fail_find.insert(id);
        self
    }

    pub fn failing_ancestors(mut self, id: FolderId) -> Self {
        self.fail_ancestors.insert(id);
        self
    }

    pub fn failing_descendants(mut self) -> Self {
        self.fail_descendants = true;
        self
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn ancestor_calls(&self) -> usize {
        self.ancestor_calls.load(Ordering::SeqCst)
    }

    pub fn descendant_calls(&self) -> usize {
        self.descendant_calls.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> Vec<FolderId> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl FolderProvider for StubFolderProvider {
    async fn find_by_id(&self, id: FolderId) -> DomainResult<Option<Folder>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_find.contains(&id) {
            return Err(unavailable());
        }
        Ok(self.folders.get(&id).cloned())
    }

    async fn descendant_ids(&self, id: FolderId) -> DomainResult<Vec<FolderId>> {
        self.descendant_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_descendants {
            return Err(unavailable());
        }
        let mut result = vec![id];
        let mut index = 0;
        while index < result.len() {
            let parent = result[index];
            let mut children: Vec<FolderId> = self
                .folders
                .values()
                .filter(|f| f.parent_id == Some(parent))
                .map(|f| f.id)
                .collect();
            children.sort();
            result.extend(children);
            index += 1;
        }
        Ok(result)
    }

    async fn ancestors(&self, id: FolderId) -> DomainResult<Vec<Folder>> {
        self.ancestor_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_ancestors.contains(&id) {
            return Err(unavailable());
        }
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let folder = self
                .folders
                .get(&current)
                .cloned()
                .ok_or(DomainError::FolderNotFound(current))?;
            cursor = folder.parent_id;
            chain.push(folder);
        }
        chain.reverse();
        Ok(chain)
    }

    async fn delete(&self, id: FolderId) -> DomainResult<()> {
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}
