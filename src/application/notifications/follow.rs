// src/application/notifications/follow.rs
use super::NotificationDispatcher;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::mail::FollowMail,
    },
    domain::{
        notification::{NewNotification, NotificationKind},
        user::UserId,
    },
};

impl NotificationDispatcher {
    // The upstream handler recorded this notification against the follower
    // and addressed the text with the followed user's name. Here the
    // followed user (`to_user`) is the recipient of both the notification
    // and the mail, gated by their own settings.
    pub(super) async fn on_follow(
        &self,
        to_user: UserId,
        from_user: UserId,
    ) -> ApplicationResult<()> {
        let (followed, follower) = tokio::try_join!(
            self.users.find_by_id(to_user),
            self.users.find_by_id(from_user),
        )?;
        let followed =
            followed.ok_or_else(|| ApplicationError::not_found("followed user not found"))?;
        let follower =
            follower.ok_or_else(|| ApplicationError::not_found("follower not found"))?;

        if followed.settings.new_follower {
            let message = format!(
                "{} started following you {}",
                follower.username,
                self.stamp()
            );
            self.notifications
                .insert(NewNotification::unread(
                    followed.id,
                    message,
                    NotificationKind::Follow,
                    self.clock.now(),
                ))
                .await?;
        }

        if followed.settings.email_subscribe {
            self.mailer
                .send_follow_notification(FollowMail {
                    recipient_email: followed.email.as_str().to_owned(),
                    from_username: follower.username.as_str().to_owned(),
                })
                .await?;
        }

        Ok(())
    }
}
