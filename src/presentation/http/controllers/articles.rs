// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::article_folders::MoveArticleToFolderCommand,
    dto::{ArticleWithFolder, Page},
    queries::article_folders::{GetArticleWithFolderQuery, ListArticlesWithFolderQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number.
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub owner_type: String,
    #[serde(default)]
    pub article_type: String,
    /// Substring match on the article title.
    #[serde(default)]
    pub title: String,
    /// Restrict the listing to this folder and everything nested under it.
    #[serde(default)]
    pub folder_id: Option<i64>,
}

impl From<ArticleListParams> for ListArticlesWithFolderQuery {
    fn from(params: ArticleListParams) -> Self {
        Self {
            page: params.page,
            size: params.size,
            owner_id: params.owner_id,
            owner_type: params.owner_type,
            article_type: params.article_type,
            title: params.title,
            folder_id: params.folder_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoveArticleRequest {
    /// Target folder; `null` removes the article from its folder.
    #[serde(default)]
    pub folder_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles with folder context.", body = Page<ArticleWithFolder>),
        (status = 400, description = "Invalid query.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleWithFolder>>> {
    state
        .services
        .article_folder_queries
        .list_articles_with_folder(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with folder context.", body = ArticleWithFolder),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleWithFolder>> {
    state
        .services
        .article_folder_queries
        .get_article_with_folder(GetArticleWithFolderQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/folder",
    params(("id" = i64, Path, description = "Article id")),
    request_body = MoveArticleRequest,
    responses(
        (status = 200, description = "Article moved.", body = StatusResponse),
        (status = 404, description = "Article or target folder not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn move_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<MoveArticleRequest>,
) -> HttpResult<Json<StatusResponse>> {
    let command = MoveArticleToFolderCommand {
        article_id: id,
        folder_id: payload.folder_id,
    };

    state
        .services
        .article_folder_commands
        .move_article_to_folder(command)
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "moved".into(),
    }))
}
