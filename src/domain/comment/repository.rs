use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentWithAuthor, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence boundary for comments. List results come back in
/// chronological order with their authors joined in.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn count_top_level(&self, article_id: ArticleId) -> DomainResult<u64>;

    async fn list_top_level(
        &self,
        article_id: ArticleId,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<CommentWithAuthor>>;

    async fn count_replies(&self, parent_id: CommentId) -> DomainResult<u64>;

    async fn list_replies(
        &self,
        parent_id: CommentId,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<CommentWithAuthor>>;

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    async fn find_with_author(&self, id: CommentId) -> DomainResult<Option<CommentWithAuthor>>;

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Deleting a parent comment removes its replies as well.
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
