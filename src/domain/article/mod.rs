pub mod entity;
pub mod provider;
pub mod value_objects;

pub use entity::{Article, ArticleFilter};
pub use provider::ArticleProvider;
pub use value_objects::{ArticleId, ArticleTitle};
