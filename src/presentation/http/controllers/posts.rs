// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PostDto, SlugPreviewDto},
    queries::posts::{
        DEFAULT_LIST_LIMIT, GetPostBySlugQuery, GetPostQuery, ListPostsQuery, SlugPreviewQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct DraftParams {
    #[serde(default)]
    pub include_drafts: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub publish: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SlugPreviewRequest {
    pub title: String,
    #[serde(default)]
    pub exclude_id: Option<i64>,
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<DraftParams>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery {
            slug,
            include_drafts: params.include_drafts,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<DraftParams>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post(GetPostQuery {
            id,
            include_drafts: params.include_drafts,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        body: payload.body,
        excerpt: payload.excerpt,
        slug: payload.slug,
        publish: payload.publish,
    };

    state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        body: payload.body,
        excerpt: payload.excerpt,
        slug: payload.slug,
        publish: payload.publish,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SlugPreviewRequest>,
) -> HttpResult<Json<SlugPreviewDto>> {
    state
        .services
        .post_queries
        .preview_slug(SlugPreviewQuery {
            title: payload.title,
            exclude_id: payload.exclude_id,
        })
        .await
        .into_http()
        .map(Json)
}
