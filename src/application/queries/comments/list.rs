use super::CommentQueryService;
use crate::application::{
    dto::{CommentPageDto, PageInfo, comments::project_comments},
    error::ApplicationResult,
};

pub struct ListCommentsQuery {
    pub slug: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl CommentQueryService {
    /// Top-level comments for an article, oldest first. Replies are
    /// excluded from both the items and the total.
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<CommentPageDto> {
        let article = self.resolve_article(query.slug).await?;

        let total = self.comments.count_top_level(article.id).await?;
        let info = PageInfo::compute(query.page, query.size, total);

        let records = self
            .comments
            .list_top_level(article.id, info.limit, info.offset)
            .await?;
        let comments = project_comments(records);

        Ok(CommentPageDto {
            size: comments.len(),
            comments,
            page: info.page,
            total_pages: info.total_pages,
            total,
        })
    }
}
