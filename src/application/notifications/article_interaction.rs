// src/application/notifications/article_interaction.rs
use super::NotificationDispatcher;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::mail::InteractionMail,
    },
    domain::{
        article::ArticleId,
        events::InteractionKind,
        notification::{NewNotification, NotificationKind},
        user::UserId,
    },
};

impl NotificationDispatcher {
    pub(super) async fn on_article_interaction(
        &self,
        to_user: UserId,
        from_user: UserId,
        article_id: ArticleId,
        kind: InteractionKind,
    ) -> ApplicationResult<()> {
        let (recipient, actor, article) = tokio::try_join!(
            self.users.find_by_id(to_user),
            self.users.find_by_id(from_user),
            self.articles.find_by_id(article_id),
        )?;
        let recipient =
            recipient.ok_or_else(|| ApplicationError::not_found("recipient not found"))?;
        let actor = actor.ok_or_else(|| ApplicationError::not_found("actor not found"))?;
        let article =
            article.ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if recipient.settings.email_subscribe {
            self.mailer
                .send_comment_notification(InteractionMail {
                    recipient_email: recipient.email.as_str().to_owned(),
                    from_username: actor.username.as_str().to_owned(),
                    article_title: article.title.as_str().to_owned(),
                    article_slug: article.slug.as_str().to_owned(),
                })
                .await?;
        }

        let (enabled, verb, notification_kind) = match kind {
            InteractionKind::Like => (
                recipient.settings.article_like,
                "liked",
                NotificationKind::Like,
            ),
            InteractionKind::Comment => (
                recipient.settings.article_comment,
                "commented on",
                NotificationKind::Comment,
            ),
        };

        if enabled {
            let message = format!(
                "{} {verb} your Article: {}. Date: {}",
                actor.username,
                article.title,
                self.stamp()
            );
            self.notifications
                .insert(NewNotification::unread(
                    recipient.id,
                    message,
                    notification_kind,
                    self.clock.now(),
                ))
                .await?;
        }

        Ok(())
    }
}
