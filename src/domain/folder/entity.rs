// src/domain/folder/entity.rs
use crate::domain::folder::value_objects::FolderId;
use serde::{Deserialize, Serialize};

/// A node of the folder taxonomy. `path` is the materialized path kept by
/// the folder domain (for example `/1/4/9/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    pub name: String,
    #[serde(default)]
    pub path: String,
}
