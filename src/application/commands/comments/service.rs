// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{events::EventPublisher, time::Clock},
    domain::{article::ArticleReadRepository, comment::CommentRepository, user::UserRepository},
};

pub struct CommentCommandService {
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) articles: Arc<dyn ArticleReadRepository>,
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) events: Arc<dyn EventPublisher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        articles: Arc<dyn ArticleReadRepository>,
        users: Arc<dyn UserRepository>,
        events: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comments,
            articles,
            users,
            events,
            clock,
        }
    }
}
