// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::user::UserId;

/// An article as consumed by the comment and notification core: enough to
/// anchor a comment thread and to address notifications to its author.
/// Authoring, publishing and search live outside this crate.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub author_id: UserId,
}
