// src/presentation/http/openapi.rs
use crate::application::dto::{
    CommentAuthorDto, CommentDto, CommentPageDto, CommentThreadDto, ReplyPageDto,
};
use crate::presentation::http::controllers::comments;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Haven API",
        description = "Comment threads and notification fan-out for a social publishing backend",
        version = "0.1.0"
    ),
    paths(
        crate::presentation::http::routes::health,
        comments::list_comments,
        comments::get_comment_thread,
        comments::create_comment,
        comments::create_reply,
        comments::delete_comment,
    ),
    components(schemas(
        StatusResponse,
        CommentAuthorDto,
        CommentDto,
        CommentPageDto,
        ReplyPageDto,
        CommentThreadDto,
        comments::CreateCommentRequest,
        comments::CommentListEnvelope,
        comments::CommentThreadEnvelope,
        comments::CommentCreatedEnvelope,
        comments::StatusEnvelope,
    )),
    tags(
        (name = "System", description = "Service health."),
        (name = "Comments", description = "Two-level comment threads on articles.")
    ),
    modifiers(&ApiDocCustomizer)
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
