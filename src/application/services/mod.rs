// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::comments::CommentCommandService,
        ports::{events::EventPublisher, security::AuthTokenVerifier, time::Clock},
        queries::comments::CommentQueryService,
    },
    domain::{article::ArticleReadRepository, comment::CommentRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    token_verifier: Arc<dyn AuthTokenVerifier>,
}

impl ApplicationServices {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        events: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        token_verifier: Arc<dyn AuthTokenVerifier>,
    ) -> Self {
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&article_repo),
            Arc::clone(&user_repo),
            Arc::clone(&events),
            Arc::clone(&clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&article_repo),
        ));

        Self {
            comment_commands,
            comment_queries,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn AuthTokenVerifier> {
        Arc::clone(&self.token_verifier)
    }
}
