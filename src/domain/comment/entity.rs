// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};

/// A comment attached to an article. `parent_id` is set for replies;
/// nesting stops at one level (a reply can never itself be a parent).
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub body: CommentBody,
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Insert payload. Foreign keys are carried explicitly; the repository
/// never relies on relation-setting side effects.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: CommentBody,
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment joined with its author, as returned by the read paths.
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    fn sample_comment(parent_id: Option<CommentId>) -> Comment {
        Comment {
            id: CommentId::new(7).unwrap(),
            body: CommentBody::new("nice read").unwrap(),
            user_id: UserId::new(3).unwrap(),
            article_id: ArticleId::new(1).unwrap(),
            parent_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn reply_detection_follows_parent_id() {
        assert!(!sample_comment(None).is_reply());
        assert!(sample_comment(Some(CommentId::new(2).unwrap())).is_reply());
    }

    #[test]
    fn ownership_compares_user_ids() {
        let comment = sample_comment(None);
        assert!(comment.is_owned_by(UserId::new(3).unwrap()));
        assert!(!comment.is_owned_by(UserId::new(4).unwrap()));
    }
}
