// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleSlug,
        comment::{CommentBody, CommentId, CommentWithAuthor, NewComment},
        events::{DomainEvent, InteractionKind},
    },
};

pub struct CreateCommentCommand {
    pub slug: String,
    /// Parent comment id for replies; `None` creates a top-level comment.
    pub parent_id: Option<i64>,
    pub body: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .articles
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        let parent_id = match command.parent_id {
            Some(raw) => {
                let id = CommentId::new(raw)?;
                let parent = self
                    .comments
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
                // Replies to replies are rejected: nesting stops at one level.
                if parent.is_reply() {
                    return Err(ApplicationError::forbidden("comment cannot go pass levels"));
                }
                Some(parent.id)
            }
            None => None,
        };

        let author = self
            .users
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let body = CommentBody::new(command.body)?;
        let now = self.clock.now();
        let created = self
            .comments
            .insert(NewComment {
                body,
                user_id: author.id,
                article_id: article.id,
                parent_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        // Published after the write succeeds; consumption is asynchronous
        // and the response does not wait for it.
        self.events.publish(DomainEvent::ArticleInteraction {
            to_user: article.author_id,
            from_user: author.id,
            article_id: article.id,
            kind: InteractionKind::Comment,
        });

        Ok(CommentDto::from(CommentWithAuthor {
            comment: created,
            author,
        }))
    }
}
