// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

use folio_core::application::services::ApplicationServices;
use folio_core::domain::article::ArticleProvider;
use folio_core::domain::folder::FolderProvider;
use folio_core::infrastructure::repositories::{
    InMemoryArticleProvider, InMemoryFolderProvider, SeedDocument,
};
use folio_core::infrastructure::time::FixedClock;
use folio_core::presentation::http::{routes::build_router, state::HttpState};

use super::builders::{ArticleBuilder, folder};

pub fn services_with(
    articles: Arc<dyn ArticleProvider>,
    folders: Arc<dyn FolderProvider>,
) -> ApplicationServices {
    ApplicationServices::new(articles, folders)
}

/// Docs(1) > Guides(2) > Advanced(3), Docs(1) > Reference(4), Blog(5).
pub fn sample_seed() -> SeedDocument {
    SeedDocument {
        folders: vec![
            folder(1, None, "Docs"),
            folder(2, Some(1), "Guides"),
            folder(3, Some(2), "Advanced"),
            folder(4, Some(1), "Reference"),
            folder(5, None, "Blog"),
        ],
        articles: vec![
            ArticleBuilder::new().id(1).folder(1).title("Overview").build(),
            ArticleBuilder::new().id(2).folder(2).title("Install").build(),
            ArticleBuilder::new().id(3).folder(3).title("Tuning").build(),
            ArticleBuilder::new().id(4).folder(5).title("Launch post").build(),
            ArticleBuilder::new().id(5).title("Scratchpad").build(),
        ],
    }
}

pub fn make_test_router() -> axum::Router {
    let seed = sample_seed();
    let clock = Arc::new(FixedClock(chrono::Utc::now()));
    let folders: Arc<dyn FolderProvider> =
        Arc::new(InMemoryFolderProvider::new(seed.folders).unwrap());
    let articles: Arc<dyn ArticleProvider> =
        Arc::new(InMemoryArticleProvider::new(seed.articles, clock));
    let state = HttpState {
        services: Arc::new(services_with(articles, folders)),
    };
    build_router(state, &[])
}

pub async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

/// Assert that a body is an ErrorResponse with the expected error string.
pub fn assert_error_body(json: &Value, expected_error: &str) {
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
