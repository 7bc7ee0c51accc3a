// src/domain/events.rs
use crate::domain::article::ArticleId;
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Comment,
    Like,
}

/// Events published by the request path and consumed by the notification
/// dispatcher. Ephemeral: published then forgotten, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainEvent {
    ArticleInteraction {
        to_user: UserId,
        from_user: UserId,
        article_id: ArticleId,
        kind: InteractionKind,
    },
    Follow {
        to_user: UserId,
        from_user: UserId,
    },
    NewPost {
        author_id: UserId,
        article_id: ArticleId,
    },
}

impl DomainEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArticleInteraction { .. } => "article_interaction",
            Self::Follow { .. } => "follow",
            Self::NewPost { .. } => "new_post",
        }
    }
}
