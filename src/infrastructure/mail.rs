// src/infrastructure/mail.rs
use crate::application::{
    error::ApplicationResult,
    ports::mail::{FollowMail, InteractionMail, Mailer, NewPostMail},
};
use async_trait::async_trait;

/// Mailer adapter that records sends to the log. The actual transport is
/// an external service; wiring it in means swapping this adapter.
#[derive(Debug, Default)]
pub struct TracingMailer;

#[async_trait]
impl Mailer for TracingMailer {
    async fn send_comment_notification(&self, info: InteractionMail) -> ApplicationResult<()> {
        tracing::info!(
            recipient = %info.recipient_email,
            from = %info.from_username,
            article = %info.article_slug,
            "mail: article interaction"
        );
        Ok(())
    }

    async fn send_follow_notification(&self, info: FollowMail) -> ApplicationResult<()> {
        tracing::info!(
            recipient = %info.recipient_email,
            from = %info.from_username,
            "mail: new follower"
        );
        Ok(())
    }

    async fn send_new_post_notification(&self, info: NewPostMail) -> ApplicationResult<()> {
        tracing::info!(
            recipients = info.recipient_emails.len(),
            from = %info.from_username,
            article = %info.article_slug,
            "mail: new post"
        );
        Ok(())
    }
}
