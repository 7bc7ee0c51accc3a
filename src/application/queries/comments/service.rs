use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Article, ArticleReadRepository, ArticleSlug},
        comment::CommentRepository,
    },
};

pub struct CommentQueryService {
    pub(super) comments: Arc<dyn CommentRepository>,
    pub(super) articles: Arc<dyn ArticleReadRepository>,
}

impl CommentQueryService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        articles: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self { comments, articles }
    }

    pub(super) async fn resolve_article(&self, slug: String) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug)?;
        self.articles
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))
    }
}
