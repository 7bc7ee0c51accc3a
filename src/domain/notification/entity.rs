// src/domain/notification/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Comment,
    Like,
    Follow,
    NewArticle,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Like => "like",
            Self::Follow => "follow",
            Self::NewArticle => "newArticle",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "comment" => Ok(Self::Comment),
            "like" => Ok(Self::Like),
            "follow" => Ok(Self::Follow),
            "newArticle" => Ok(Self::NewArticle),
            other => Err(DomainError::Validation(format!(
                "unknown notification kind: {other}"
            ))),
        }
    }
}

/// An in-app notification addressed to a single recipient.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: i64,
    pub user_id: UserId,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: UserId,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl NewNotification {
    pub fn unread(
        user_id: UserId,
        message: String,
        kind: NotificationKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            message,
            kind,
            is_read: false,
            created_at,
        }
    }
}
