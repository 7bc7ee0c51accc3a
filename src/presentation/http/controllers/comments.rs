// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    dto::{CommentDto, CommentPageDto, CommentThreadDto},
    queries::comments::{GetCommentThreadQuery, ListCommentsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct CommentListParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub body: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentListEnvelope {
    pub data: CommentPageDto,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentThreadEnvelope {
    pub comment: CommentThreadDto,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentCreatedEnvelope {
    pub comment: CommentDto,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusEnvelope {
    pub status: String,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}/comments",
    params(
        ("slug" = String, Path, description = "Article slug."),
        ("page" = Option<u32>, Query, description = "Page number, 1-based."),
        ("size" = Option<u32>, Query, description = "Items per page."),
    ),
    responses(
        (status = 200, description = "Top-level comments for the article.", body = CommentListEnvelope),
        (status = 404, description = "Article not found."),
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<CommentListEnvelope>> {
    let data = state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            slug,
            page: params.page,
            size: params.size,
        })
        .await
        .into_http()?;

    Ok(Json(CommentListEnvelope {
        data,
        status: "success".into(),
        message: "Successfully fetched comments.".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}/comments/{id}",
    params(
        ("slug" = String, Path, description = "Article slug."),
        ("id" = i64, Path, description = "Parent comment id."),
        ("page" = Option<u32>, Query, description = "Reply page number, 1-based."),
        ("size" = Option<u32>, Query, description = "Replies per page."),
    ),
    responses(
        (status = 200, description = "Parent comment with a page of replies.", body = CommentThreadEnvelope),
        (status = 404, description = "Article or comment not found."),
    ),
    tag = "Comments"
)]
pub async fn get_comment_thread(
    Extension(state): Extension<HttpState>,
    Path((slug, id)): Path<(String, i64)>,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<CommentThreadEnvelope>> {
    let comment = state
        .services
        .comment_queries
        .get_comment_thread(GetCommentThreadQuery {
            slug,
            comment_id: id,
            page: params.page,
            size: params.size,
        })
        .await
        .into_http()?;

    Ok(Json(CommentThreadEnvelope {
        comment,
        status: "success".into(),
        message: "Successfully fetched comments.".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug.")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentCreatedEnvelope),
        (status = 404, description = "Article not found."),
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentCreatedEnvelope>)> {
    create(state, user, slug, None, payload.body).await
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{slug}/comments/{id}",
    params(
        ("slug" = String, Path, description = "Article slug."),
        ("id" = String, Path, description = "Parent comment id; non-numeric values create a top-level comment."),
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Reply created.", body = CommentCreatedEnvelope),
        (status = 403, description = "Reply would exceed the nesting cap."),
        (status = 404, description = "Article or parent comment not found."),
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((slug, id)): Path<(String, String)>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentCreatedEnvelope>)> {
    // A parent id that does not parse falls back to a top-level comment.
    let parent_id = id.parse::<i64>().ok();
    create(state, user, slug, parent_id, payload.body).await
}

async fn create(
    state: HttpState,
    user: crate::application::dto::AuthenticatedUser,
    slug: String,
    parent_id: Option<i64>,
    body: String,
) -> HttpResult<(StatusCode, Json<CommentCreatedEnvelope>)> {
    let comment = state
        .services
        .comment_commands
        .create_comment(
            &user,
            CreateCommentCommand {
                slug,
                parent_id,
                body,
            },
        )
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedEnvelope {
            comment,
            status: "success".into(),
            message: "successfully created comment".into(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{slug}/comments/{id}",
    params(
        ("slug" = String, Path, description = "Article slug."),
        ("id" = i64, Path, description = "Comment id."),
    ),
    responses(
        (status = 200, description = "Comment deleted.", body = StatusEnvelope),
        (status = 403, description = "Requester does not own the comment."),
        (status = 404, description = "Article or comment not found."),
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((slug, id)): Path<(String, i64)>,
) -> HttpResult<Json<StatusEnvelope>> {
    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand {
            slug,
            comment_id: id,
        })
        .await
        .into_http()?;

    Ok(Json(StatusEnvelope {
        status: "success".into(),
        message: "deleted comment successfully".into(),
    }))
}
