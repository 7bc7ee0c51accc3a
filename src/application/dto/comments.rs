use crate::domain::comment::CommentWithAuthor;
use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The public author shape: internal fields (email, settings) never leak.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthorDto {
    pub username: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

impl From<&User> for CommentAuthorDto {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.as_str().to_owned(),
            bio: user.bio.clone(),
            image_url: user.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: CommentAuthorDto,
}

impl From<CommentWithAuthor> for CommentDto {
    fn from(record: CommentWithAuthor) -> Self {
        Self {
            id: record.comment.id.into(),
            body: record.comment.body.into(),
            created_at: record.comment.created_at,
            updated_at: record.comment.updated_at,
            author: CommentAuthorDto::from(&record.author),
        }
    }
}

pub fn project_comments(records: Vec<CommentWithAuthor>) -> Vec<CommentDto> {
    records.into_iter().map(Into::into).collect()
}

/// Top-level listing payload. `size` is the number of items actually
/// returned on this page, not the requested page size.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentPageDto {
    pub comments: Vec<CommentDto>,
    pub page: u32,
    pub total_pages: u64,
    pub size: usize,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPageDto {
    pub data: Vec<CommentDto>,
    pub page: u32,
    pub total_pages: u64,
    pub size: usize,
    pub total: u64,
}

/// A parent comment together with one paginated page of its replies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadDto {
    pub id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: CommentAuthorDto,
    pub comments: ReplyPageDto,
}

impl CommentThreadDto {
    pub fn new(parent: CommentDto, replies: ReplyPageDto) -> Self {
        Self {
            id: parent.id,
            body: parent.body,
            created_at: parent.created_at,
            updated_at: parent.updated_at,
            author: parent.author,
            comments: replies,
        }
    }
}
