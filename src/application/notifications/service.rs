// src/application/notifications/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{mail::Mailer, time::Clock},
    domain::{
        article::ArticleReadRepository, events::DomainEvent,
        notification::NotificationRepository, user::UserRepository,
    },
};

/// Consumes domain events and fans them out into in-app notifications and
/// mail, gated per recipient by their notification settings. Runs on the
/// event-queue worker, detached from the request that published the event.
pub struct NotificationDispatcher {
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) articles: Arc<dyn ArticleReadRepository>,
    pub(super) notifications: Arc<dyn NotificationRepository>,
    pub(super) mailer: Arc<dyn Mailer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NotificationDispatcher {
    pub fn new(
        users: Arc<dyn UserRepository>,
        articles: Arc<dyn ArticleReadRepository>,
        notifications: Arc<dyn NotificationRepository>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            articles,
            notifications,
            mailer,
            clock,
        }
    }

    /// Handler failures are logged and swallowed; nothing propagates back
    /// to the publisher and nothing is retried.
    pub async fn dispatch(&self, event: DomainEvent) {
        let name = event.name();
        let result = match event {
            DomainEvent::ArticleInteraction {
                to_user,
                from_user,
                article_id,
                kind,
            } => {
                self.on_article_interaction(to_user, from_user, article_id, kind)
                    .await
            }
            DomainEvent::Follow { to_user, from_user } => {
                self.on_follow(to_user, from_user).await
            }
            DomainEvent::NewPost {
                author_id,
                article_id,
            } => self.on_new_post(author_id, article_id).await,
        };

        if let Err(err) = result {
            tracing::warn!(event = name, error = %err, "notification dispatch failed");
        }
    }

    /// Human-readable timestamp embedded in notification messages.
    pub(super) fn stamp(&self) -> String {
        self.clock.now().format("%A, %B %-d, %Y %-I:%M %p").to_string()
    }
}
