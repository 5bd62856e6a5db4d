// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::move_article,
        crate::presentation::http::controllers::folders::get_folder,
        crate::presentation::http::controllers::folders::folder_deletability,
        crate::presentation::http::controllers::folders::delete_folder,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::MoveArticleRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleWithFolder,
            crate::application::dto::BreadcrumbItem,
            crate::application::dto::FolderInfo,
            crate::application::dto::FolderDto,
            crate::application::dto::FolderDeletability
        )
    ),
    tags(
        (name = "Articles", description = "Articles enriched with folder context"),
        (name = "Folders", description = "Folder checks and guarded deletion"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Folio API",
        description = "Article and folder aggregation service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

/// Write the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` (or the default
/// location) and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let path = env::var_os("OPENAPI_SNAPSHOT_PATH")
        .map_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH), PathBuf::from);
    write_openapi_document(&path)?;
    Ok(path)
}

pub fn write_openapi_document(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
