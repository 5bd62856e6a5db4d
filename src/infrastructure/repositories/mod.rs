// src/infrastructure/repositories/mod.rs
mod error;
mod memory_article;
mod memory_folder;
mod seed;

pub use memory_article::InMemoryArticleProvider;
pub use memory_folder::InMemoryFolderProvider;
pub use seed::{SeedDocument, SeedError};
