use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::folder::{Folder, FolderId, FolderProvider};
use crate::infrastructure::repositories::error::map_poisoned;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::sync::RwLock;

/// Folder tree held in memory, linked through `parent_id`.
#[derive(Default)]
pub struct InMemoryFolderProvider {
    folders: RwLock<BTreeMap<FolderId, Folder>>,
}

impl InMemoryFolderProvider {
    /// Build the tree, filling in materialized paths (`/1/4/9/`) for folders
    /// that were given none.
    pub fn new(folders: impl IntoIterator<Item = Folder>) -> DomainResult<Self> {
        let mut by_id: BTreeMap<FolderId, Folder> =
            folders.into_iter().map(|folder| (folder.id, folder)).collect();

        let ids: Vec<FolderId> = by_id.keys().copied().collect();
        for id in ids {
            let chain = chain_to_root(&by_id, id)?;
            if let Some(folder) = by_id.get_mut(&id) {
                if folder.path.is_empty() {
                    folder.path = materialized_path(&chain);
                }
            }
        }

        Ok(Self {
            folders: RwLock::new(by_id),
        })
    }
}

/// Ids from the root down to `id`, inclusive.
fn chain_to_root(folders: &BTreeMap<FolderId, Folder>, id: FolderId) -> DomainResult<Vec<FolderId>> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor = Some(id);

    while let Some(current) = cursor {
        if !seen.insert(current) {
            return Err(DomainError::provider(format!(
                "folder hierarchy contains a cycle at {current}"
            )));
        }
        let folder = folders
            .get(&current)
            .ok_or(DomainError::FolderNotFound(current))?;
        chain.push(current);
        cursor = folder.parent_id;
    }

    chain.reverse();
    Ok(chain)
}

fn materialized_path(chain: &[FolderId]) -> String {
    let mut path = String::from("/");
    for id in chain {
        path.push_str(&id.to_string());
        path.push('/');
    }
    path
}

#[async_trait]
impl FolderProvider for InMemoryFolderProvider {
    async fn find_by_id(&self, id: FolderId) -> DomainResult<Option<Folder>> {
        let folders = self.folders.read().map_err(map_poisoned("folder"))?;
        Ok(folders.get(&id).cloned())
    }

    async fn descendant_ids(&self, id: FolderId) -> DomainResult<Vec<FolderId>> {
        let folders = self.folders.read().map_err(map_poisoned("folder"))?;
        if !folders.contains_key(&id) {
            return Err(DomainError::FolderNotFound(id));
        }

        let mut result = vec![id];
        let mut queue = VecDeque::from([id]);
        while let Some(parent) = queue.pop_front() {
            for child in folders.values().filter(|f| f.parent_id == Some(parent)) {
                if !result.contains(&child.id) {
                    result.push(child.id);
                    queue.push_back(child.id);
                }
            }
        }
        Ok(result)
    }

    async fn ancestors(&self, id: FolderId) -> DomainResult<Vec<Folder>> {
        let folders = self.folders.read().map_err(map_poisoned("folder"))?;
        chain_to_root(&folders, id)?
            .into_iter()
            .map(|ancestor| {
                folders
                    .get(&ancestor)
                    .cloned()
                    .ok_or(DomainError::FolderNotFound(ancestor))
            })
            .collect()
    }

    async fn delete(&self, id: FolderId) -> DomainResult<()> {
        let mut folders = self.folders.write().map_err(map_poisoned("folder"))?;
        if !folders.contains_key(&id) {
            return Err(DomainError::FolderNotFound(id));
        }
        if folders.values().any(|f| f.parent_id == Some(id)) {
            return Err(DomainError::Validation(format!(
                "folder {id} still has subfolders"
            )));
        }
        folders.remove(&id);
        Ok(())
    }
}
