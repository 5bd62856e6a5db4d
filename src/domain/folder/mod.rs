pub mod entity;
pub mod provider;
pub mod value_objects;

pub use entity::Folder;
pub use provider::FolderProvider;
pub use value_objects::FolderId;
