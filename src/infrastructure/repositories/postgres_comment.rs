// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRepository, CommentWithAuthor, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{EmailAddress, NotificationSettings, User, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    user_id: i64,
    article_id: i64,
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            body: CommentBody::new(row.body)?,
            user_id: UserId::new(row.user_id)?,
            article_id: ArticleId::new(row.article_id)?,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Comment joined with its author in a single row.
#[derive(Debug, FromRow)]
struct CommentAuthorRow {
    id: i64,
    body: String,
    user_id: i64,
    article_id: i64,
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: String,
    author_email: String,
    author_bio: Option<String>,
    author_image_url: Option<String>,
    author_settings: serde_json::Value,
    author_created_at: DateTime<Utc>,
}

impl TryFrom<CommentAuthorRow> for CommentWithAuthor {
    type Error = DomainError;

    fn try_from(row: CommentAuthorRow) -> Result<Self, Self::Error> {
        let settings: NotificationSettings = serde_json::from_value(row.author_settings)
            .map_err(|err| DomainError::Persistence(format!("corrupt user settings: {err}")))?;
        let author = User {
            id: UserId::new(row.user_id)?,
            username: Username::new(row.author_username)?,
            email: EmailAddress::new(row.author_email)?,
            bio: row.author_bio,
            image_url: row.author_image_url,
            settings,
            created_at: row.author_created_at,
        };
        let comment = Comment {
            id: CommentId::new(row.id)?,
            body: CommentBody::new(row.body)?,
            user_id: UserId::new(row.user_id)?,
            article_id: ArticleId::new(row.article_id)?,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };
        Ok(CommentWithAuthor { comment, author })
    }
}

const JOINED_COLUMNS: &str = "c.id, c.body, c.user_id, c.article_id, c.parent_id, \
     c.created_at, c.updated_at, \
     u.username AS author_username, u.email AS author_email, u.bio AS author_bio, \
     u.image_url AS author_image_url, u.settings AS author_settings, \
     u.created_at AS author_created_at";

fn clamp_offset(offset: u64) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn count_top_level(&self, article_id: ArticleId) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments WHERE article_id = $1 AND parent_id IS NULL",
        )
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(count.max(0) as u64)
    }

    async fn list_top_level(
        &self,
        article_id: ArticleId,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentAuthorRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM comments c JOIN users u ON u.id = c.user_id
             WHERE c.article_id = $1 AND c.parent_id IS NULL
             ORDER BY c.created_at, c.id
             LIMIT $2 OFFSET $3"
        ))
        .bind(i64::from(article_id))
        .bind(i64::from(limit))
        .bind(clamp_offset(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentWithAuthor::try_from).collect()
    }

    async fn count_replies(&self, parent_id: CommentId) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments WHERE parent_id = $1",
        )
        .bind(i64::from(parent_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(count.max(0) as u64)
    }

    async fn list_replies(
        &self,
        parent_id: CommentId,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentAuthorRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM comments c JOIN users u ON u.id = c.user_id
             WHERE c.parent_id = $1
             ORDER BY c.created_at, c.id
             LIMIT $2 OFFSET $3"
        ))
        .bind(i64::from(parent_id))
        .bind(i64::from(limit))
        .bind(clamp_offset(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(CommentWithAuthor::try_from).collect()
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, body, user_id, article_id, parent_id, created_at, updated_at
             FROM comments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_with_author(&self, id: CommentId) -> DomainResult<Option<CommentWithAuthor>> {
        let row = sqlx::query_as::<_, CommentAuthorRow>(&format!(
            "SELECT {JOINED_COLUMNS}
             FROM comments c JOIN users u ON u.id = c.user_id
             WHERE c.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CommentWithAuthor::try_from).transpose()
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            body,
            user_id,
            article_id,
            parent_id,
            created_at,
            updated_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (body, user_id, article_id, parent_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, body, user_id, article_id, parent_id, created_at, updated_at",
        )
        .bind(body.as_str())
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .bind(parent_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        // parent_id carries ON DELETE CASCADE, so replies go with the parent.
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
