// tests/support/builders.rs
use chrono::{TimeZone, Utc};

use folio_core::domain::article::{Article, ArticleId, ArticleTitle};
use folio_core::domain::folder::{Folder, FolderId};

pub fn fid(id: i64) -> FolderId {
    FolderId::new(id).unwrap()
}

pub fn aid(id: i64) -> ArticleId {
    ArticleId::new(id).unwrap()
}

pub fn folder(id: i64, parent: Option<i64>, name: &str) -> Folder {
    Folder {
        id: fid(id),
        parent_id: parent.map(fid),
        name: name.into(),
        path: String::new(),
    }
}

pub struct ArticleBuilder {
    id: i64,
    folder_id: Option<i64>,
    title: String,
    owner_id: Option<i64>,
    owner_type: String,
    article_type: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            folder_id: None,
            title: "Test Article".into(),
            owner_id: Some(1),
            owner_type: "user".into(),
            article_type: "post".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn folder(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn owner(mut self, owner_id: i64, owner_type: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id);
        self.owner_type = owner_type.into();
        self
    }

    pub fn build(self) -> Article {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Article {
            id: aid(self.id),
            folder_id: self.folder_id.map(fid),
            title: ArticleTitle::new(self.title).unwrap(),
            owner_id: self.owner_id,
            owner_type: self.owner_type,
            article_type: self.article_type,
            content: "body".into(),
            created_at: at,
            updated_at: at,
        }
    }
}

pub fn article(id: i64, folder_id: Option<i64>) -> Article {
    let builder = ArticleBuilder::new().id(id).title(format!("Article {id}"));
    match folder_id {
        Some(folder_id) => builder.folder(folder_id).build(),
        None => builder.build(),
    }
}
