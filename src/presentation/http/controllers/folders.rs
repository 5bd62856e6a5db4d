// src/presentation/http/controllers/folders.rs
use crate::application::{
    commands::article_folders::DeleteFolderCommand,
    dto::{FolderDeletability, FolderDto},
    queries::article_folders::{CanDeleteFolderQuery, ValidateFolderExistsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/folders/{id}",
    params(("id" = i64, Path, description = "Folder id")),
    responses(
        (status = 200, description = "Folder exists.", body = FolderDto),
        (status = 404, description = "Folder not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Folders"
)]
pub async fn get_folder(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<FolderDto>> {
    state
        .services
        .article_folder_queries
        .validate_folder_exists(ValidateFolderExistsQuery { folder_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/folders/{id}/deletable",
    params(("id" = i64, Path, description = "Folder id")),
    responses(
        (status = 200, description = "Whether the folder is free of articles.", body = FolderDeletability)
    ),
    tag = "Folders"
)]
pub async fn folder_deletability(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<FolderDeletability>> {
    state
        .services
        .article_folder_queries
        .can_delete_folder(CanDeleteFolderQuery { folder_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/folders/{id}",
    params(("id" = i64, Path, description = "Folder id")),
    responses(
        (status = 200, description = "Folder deleted.", body = StatusResponse),
        (status = 404, description = "Folder not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Articles are still filed in the folder.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Folders"
)]
pub async fn delete_folder(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_folder_commands
        .delete_folder(DeleteFolderCommand { folder_id: id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
