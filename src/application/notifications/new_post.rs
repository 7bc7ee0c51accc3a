// src/application/notifications/new_post.rs
use super::NotificationDispatcher;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::mail::NewPostMail,
    },
    domain::{
        article::ArticleId,
        notification::{NewNotification, NotificationKind},
        user::{User, UserId},
    },
};

impl NotificationDispatcher {
    pub(super) async fn on_new_post(
        &self,
        author_id: UserId,
        article_id: ArticleId,
    ) -> ApplicationResult<()> {
        let (author, article, followers) = tokio::try_join!(
            self.users.find_by_id(author_id),
            self.articles.find_by_id(article_id),
            self.users.list_followers(author_id),
        )?;
        let author = author.ok_or_else(|| ApplicationError::not_found("author not found"))?;
        let article =
            article.ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let recipients: Vec<User> = followers
            .into_iter()
            .filter(|user| user.settings.new_article_from_user_following)
            .collect();
        if recipients.is_empty() {
            return Ok(());
        }

        let stamp = self.stamp();
        for user in &recipients {
            let message = format!(
                "{} created a new Article: {} {stamp}",
                author.username, article.title
            );
            // One failed insert must not block the remaining followers.
            if let Err(err) = self
                .notifications
                .insert(NewNotification::unread(
                    user.id,
                    message,
                    NotificationKind::NewArticle,
                    self.clock.now(),
                ))
                .await
            {
                tracing::warn!(user_id = %user.id, error = %err, "failed to record new-post notification");
            }
        }

        self.mailer
            .send_new_post_notification(NewPostMail {
                recipient_emails: recipients
                    .iter()
                    .map(|user| user.email.as_str().to_owned())
                    .collect(),
                from_username: author.username.as_str().to_owned(),
                article_title: article.title.as_str().to_owned(),
                article_slug: article.slug.as_str().to_owned(),
            })
            .await?;

        Ok(())
    }
}
