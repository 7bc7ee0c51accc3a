// src/application/ports/mail.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct InteractionMail {
    pub recipient_email: String,
    pub from_username: String,
    pub article_title: String,
    pub article_slug: String,
}

#[derive(Debug, Clone)]
pub struct FollowMail {
    pub recipient_email: String,
    pub from_username: String,
}

#[derive(Debug, Clone)]
pub struct NewPostMail {
    pub recipient_emails: Vec<String>,
    pub from_username: String,
    pub article_title: String,
    pub article_slug: String,
}

/// Outbound mail boundary. Transport (SMTP, provider API) lives behind it;
/// delivery is best-effort with no retries.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_comment_notification(&self, info: InteractionMail) -> ApplicationResult<()>;
    async fn send_follow_notification(&self, info: FollowMail) -> ApplicationResult<()>;
    async fn send_new_post_notification(&self, info: NewPostMail) -> ApplicationResult<()>;
}
