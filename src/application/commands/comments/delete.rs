// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleSlug, comment::CommentId},
};

pub struct DeleteCommentCommand {
    pub slug: String,
    pub comment_id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let slug = ArticleSlug::new(command.slug)?;
        self.articles
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        let id = CommentId::new(command.comment_id)?;
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        if !comment.is_owned_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "You cannot perform this operation",
            ));
        }

        // Replies go with their parent (cascade).
        self.comments.delete(comment.id).await?;
        Ok(())
    }
}
